mod common;

#[test]
fn test_upsert_inserts_then_replaces() {
    let (_dir, db) = common::setup_db();

    db.upsert_goal("daily_steps", 8000.0, Some("steps")).unwrap();
    assert_eq!(db.goal_value("daily_steps").unwrap(), (8000.0, "steps".to_string()));

    db.upsert_goal("daily_steps", 10000.0, Some("steps")).unwrap();
    assert_eq!(db.goal_value("daily_steps").unwrap().0, 10000.0);

    // Still a single row for the key.
    assert_eq!(db.list_goals().unwrap().len(), 1);
}

#[test]
fn test_upsert_carries_unit_forward_when_omitted() {
    let (_dir, db) = common::setup_db();

    db.upsert_goal("k", 10.0, Some("u")).unwrap();
    db.upsert_goal("k", 20.0, None).unwrap();

    assert_eq!(db.goal_value("k").unwrap(), (20.0, "u".to_string()));
}

#[test]
fn test_upsert_without_unit_on_new_key_stores_empty() {
    let (_dir, db) = common::setup_db();

    db.upsert_goal("bodyweight_kg", 80.0, None).unwrap();
    assert_eq!(db.goal_value("bodyweight_kg").unwrap(), (80.0, String::new()));
}

#[test]
fn test_unknown_key_is_zero_and_empty() {
    let (_dir, db) = common::setup_db();

    assert_eq!(db.goal_value("never_set").unwrap(), (0.0, String::new()));
}

#[test]
fn test_arbitrary_keys_are_accepted() {
    let (_dir, db) = common::setup_db();

    db.upsert_goal("weekly_swim_laps", 40.0, Some("laps")).unwrap();
    let goals = db.list_goals().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].key, "weekly_swim_laps");
    assert_eq!(goals[0].unit, "laps");
}
