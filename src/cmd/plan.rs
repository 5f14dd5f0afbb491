use anyhow::Result;
use colored::Colorize;

use fitplan::db::{self, Database};
use fitplan::output::human;

pub fn run() -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    let entries = db.list_plan()?;

    if entries.is_empty() {
        println!("No plan found. Run `fitplan init` to create a starter plan.");
        return Ok(());
    }

    println!("{}", "4-week starter plan".bold());
    println!("{}", human::plan_table(&entries));
    Ok(())
}
