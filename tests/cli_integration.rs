/// End-to-end tests for the fitplan binary.
///
/// Each test spawns the compiled binary via `assert_cmd::cargo_bin_cmd!`
/// and points `FITPLAN_HOME` at a fresh `TempDir` so tests never touch a
/// real database next to the executable.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("fitplan");
    c.env("FITPLAN_HOME", dir.path());
    c
}

fn init_dir(dir: &TempDir) {
    cmd_in(dir).args(["init"]).assert().success();
}

// ── init ─────────────────────────────────────────────────────────────────────

#[test]
fn test_init_creates_db_and_prints_owner() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--name", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized plan for Ada starting"));

    assert!(dir.path().join("fitplan.db").exists());
}

#[test]
fn test_init_never_overwrites_profile() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["init", "--name", "Ada"]).assert().success();
    cmd_in(&dir)
        .args(["init", "--name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized plan for Ada"));
}

// ── goals ────────────────────────────────────────────────────────────────────

#[test]
fn test_set_goal_prints_new_value() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["set-goal", "daily_calories", "2200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set goal daily_calories = 2200 kcal"));
}

// ── logging ──────────────────────────────────────────────────────────────────

#[test]
fn test_add_workout_and_meal() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["add-workout", "--duration", "30", "--type", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout logged."));

    cmd_in(&dir)
        .args(["add-meal", "--meal-type", "lunch", "--protein", "10", "--carbs", "20", "--fat", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal logged."));

    // The derived 165 kcal lands in the export.
    cmd_in(&dir)
        .args(["export", "meals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("165"));
}

#[test]
fn test_malformed_date_fails_before_any_write() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["add-workout", "--date", "2024-13-01", "--duration", "30"])
        .assert()
        .failure();

    cmd_in(&dir)
        .args(["export", "workouts"])
        .assert()
        .success()
        .stdout("id,date,type,duration_min,distance_km,sets,reps,weight_kg,notes,created_at\n");
}

// ── reporting ────────────────────────────────────────────────────────────────

#[test]
fn test_today_shows_progress_sections() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan owner: You"))
        .stdout(predicate::str::contains("Nutrition"))
        .stdout(predicate::str::contains("Exercise"))
        .stdout(predicate::str::contains("/1800 kcal"));
}

#[test]
fn test_week_shows_range_and_totals() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week: "))
        .stdout(predicate::str::contains("Exercise minutes"))
        .stdout(predicate::str::contains("Total calories:"));
}

#[test]
fn test_plan_lists_twelve_sessions() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir).args(["plan"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("4-week starter plan"));
    assert_eq!(stdout.matches("Workout A").count(), 4);
    assert_eq!(stdout.matches("Workout C").count(), 4);
}

#[test]
fn test_plan_before_init_suggests_init() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan found"));
}

// ── export ───────────────────────────────────────────────────────────────────

#[test]
fn test_export_goals_csv_header() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["export", "goals"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,key,value,unit,updated_at"));
}

#[test]
fn test_export_rejects_unknown_table() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["export", "profile"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid table"));
}

#[test]
fn test_export_json_format() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir).args(["export", "goals", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let out = dir.path().join("goals.csv");
    cmd_in(&dir)
        .args(["export", "goals", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,key,value,unit,updated_at"));
}

// ── misc ─────────────────────────────────────────────────────────────────────

#[test]
fn test_no_command_shows_usage_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
