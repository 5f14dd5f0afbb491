#![allow(dead_code)]

use chrono::NaiveDate;
use fitplan::db::Database;
use fitplan::models::{NewMeal, NewWorkout};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A strength workout with only a duration set.
pub fn workout(on: NaiveDate, minutes: f64) -> NewWorkout {
    NewWorkout {
        date: on,
        workout_type: "strength".to_string(),
        duration_min: Some(minutes),
        distance_km: None,
        sets: None,
        reps: None,
        weight_kg: None,
        notes: None,
    }
}

/// A meal with explicit calories and protein, no other macros.
pub fn meal(on: NaiveDate, calories: f64, protein_g: f64) -> NewMeal {
    NewMeal {
        date: on,
        meal_type: "meal".to_string(),
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbs_g: None,
        fat_g: None,
        items: None,
    }
}
