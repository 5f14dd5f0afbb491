use anyhow::Result;
use chrono::NaiveDate;

use fitplan::core::dates;
use fitplan::db::{self, Database};
use fitplan::models::{NewMeal, NewWorkout};

#[allow(clippy::too_many_arguments)]
pub fn run_workout(
    date: Option<NaiveDate>,
    workout_type: &str,
    duration_min: Option<f64>,
    distance_km: Option<f64>,
    sets: Option<i64>,
    reps: Option<i64>,
    weight_kg: Option<f64>,
    notes: Option<String>,
) -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    db.insert_workout(&NewWorkout {
        date: date.unwrap_or_else(dates::today),
        workout_type: workout_type.to_string(),
        duration_min,
        distance_km,
        sets,
        reps,
        weight_kg,
        notes,
    })?;
    println!("Workout logged.");
    Ok(())
}

pub fn run_meal(
    date: Option<NaiveDate>,
    meal_type: &str,
    calories: Option<f64>,
    protein_g: Option<f64>,
    carbs_g: Option<f64>,
    fat_g: Option<f64>,
    items: Option<String>,
) -> Result<()> {
    let db = Database::open(&db::db_path()?)?;
    db.insert_meal(&NewMeal {
        date: date.unwrap_or_else(dates::today),
        meal_type: meal_type.to_string(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        items,
    })?;
    println!("Meal logged.");
    Ok(())
}
