use anyhow::Result;
use colored::Colorize;

use fitplan::core::{dates, rollup};
use fitplan::db::{self, Database};
use fitplan::models::Profile;
use fitplan::output::human;

pub fn run() -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    let today = dates::today();

    let profile = db.get_profile()?.unwrap_or_else(Profile::fallback);
    println!("Today: {} | Plan owner: {}", today, profile.name);

    match rollup::plan_for_date(&db, today)? {
        Some(p) => println!("Suggested workout: {} - {}", p.name, p.details),
        None => println!("No specific workout planned today. Consider a 20-30 min walk."),
    }

    let day = rollup::day_totals(&db, today)?;
    let week = rollup::week_totals(&db, today)?;

    let (cal_goal, cal_unit) = db.goal_value("daily_calories")?;
    let (protein_goal, protein_unit) = db.goal_value("daily_protein_g")?;
    let (walk_goal, walk_unit) = db.goal_value("daily_walk_minutes")?;
    let (week_goal, week_unit) = db.goal_value("weekly_exercise_minutes")?;

    println!();
    println!("{}", "Nutrition".bold());
    println!("{}", human::progress_bar("Calories", day.calories, cal_goal, &cal_unit));
    println!("{}", human::progress_bar("Protein", day.protein_g, protein_goal, &protein_unit));

    println!();
    println!("{}", "Exercise".bold());
    println!("{}", human::progress_bar("Today's minutes", day.exercise_min, walk_goal, &walk_unit));
    println!("{}", human::progress_bar("This week", week.exercise_min, week_goal, &week_unit));

    Ok(())
}
