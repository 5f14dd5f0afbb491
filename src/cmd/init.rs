use anyhow::Result;

use fitplan::core::seed;
use fitplan::db::{self, Database};
use fitplan::models::Profile;

pub fn run(name: Option<&str>) -> Result<()> {
    let path = db::db_path()?;
    let db = Database::open(&path)?;
    seed::seed_defaults(&db, name)?;

    let profile = db.get_profile()?.unwrap_or_else(Profile::fallback);
    println!(
        "Initialized plan for {} starting {}. DB: {}",
        profile.name,
        profile.start_date,
        path.display()
    );
    Ok(())
}
