use anyhow::Result;

use fitplan::db::{self, Database};

pub fn run(key: &str, value: f64, unit: Option<&str>) -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    db.upsert_goal(key, value, unit)?;

    let (value, unit) = db.goal_value(key)?;
    println!("Set goal {} = {} {}", key, value, unit);
    Ok(())
}
