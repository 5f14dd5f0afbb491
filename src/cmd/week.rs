use anyhow::Result;
use colored::Colorize;

use fitplan::core::{dates, rollup};
use fitplan::db::{self, Database};
use fitplan::output::human;

pub fn run() -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    let week = rollup::week_totals(&db, dates::today())?;

    let (week_goal, week_unit) = db.goal_value("weekly_exercise_minutes")?;

    println!("{}", format!("Week: {} to {}", week.start, week.end).bold());
    println!(
        "{}",
        human::progress_bar("Exercise minutes", week.exercise_min, week_goal, &week_unit)
    );
    println!(
        "Total calories: {:.0} kcal | Total protein: {:.0} g",
        week.calories, week.protein_g
    );
    Ok(())
}
