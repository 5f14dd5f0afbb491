use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::core::dates;
use crate::db::Database;
use crate::models::PlanEntry;

/// Logged totals for a single date.
#[derive(Debug, Serialize)]
pub struct DayTotals {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein_g: f64,
    pub exercise_min: f64,
}

/// Logged totals for the Monday..Sunday week containing a date.
#[derive(Debug, Serialize)]
pub struct WeekTotals {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub exercise_min: f64,
    pub calories: f64,
    pub protein_g: f64,
}

/// Sums for one date, derived fresh on every call.
pub fn day_totals(db: &Database, date: NaiveDate) -> Result<DayTotals> {
    let nutrition = db.sum_nutrition(date)?;
    let exercise_min = db.sum_workout_minutes(date)?;
    Ok(DayTotals {
        date,
        calories: nutrition.calories,
        protein_g: nutrition.protein_g,
        exercise_min,
    })
}

/// Sums over the week containing `date`, inclusive of both ends.
pub fn week_totals(db: &Database, date: NaiveDate) -> Result<WeekTotals> {
    let start = dates::week_start(date);
    let end = start + Duration::days(6);
    let nutrition = db.sum_nutrition_between(start, end)?;
    let exercise_min = db.sum_workout_minutes_between(start, end)?;
    Ok(WeekTotals {
        start,
        end,
        exercise_min,
        calories: nutrition.calories,
        protein_g: nutrition.protein_g,
    })
}

/// The plan entry scheduled for `date`, resolved against the profile's
/// start date. A missing profile anchors the plan at `date` itself; a
/// missing entry means nothing is scheduled and is not an error.
pub fn plan_for_date(db: &Database, date: NaiveDate) -> Result<Option<PlanEntry>> {
    let start = match db.get_profile()? {
        Some(profile) => profile.start_date,
        None => date,
    };
    let week = dates::plan_week_number(start, date);
    let dow = dates::iso_dow(date);
    db.plan_for(week, dow)
}
