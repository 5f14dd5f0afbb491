use anyhow::Result;

use crate::core::dates;
use crate::db::Database;
use crate::models::PlanEntry;

/// Default goals seeded on init: (key, value, unit).
pub const DEFAULT_GOALS: [(&str, f64, &str); 4] = [
    ("daily_calories", 1800.0, "kcal"),
    ("daily_protein_g", 120.0, "g"),
    ("weekly_exercise_minutes", 150.0, "min"),
    ("daily_walk_minutes", 30.0, "min"),
];

/// The A/B/C rotation: (ISO day of week, name, details). Every plan
/// week repeats the same three sessions.
const PLAN_ROTATION: [(u32, &str, &str); 3] = [
    (
        1,
        "Workout A",
        "Full-body: Squat 3x8, Push-up 3xAMRAP, Row 3x10, Plank 3x30s",
    ),
    (
        3,
        "Workout B",
        "Full-body: Hinge 3x8, Overhead Press 3x8, Lat Pull 3x10, Side Plank 3x30s",
    ),
    (
        5,
        "Workout C",
        "Full-body: Lunge 3x8/leg, Bench 3x8, Row 3x10, Deadbug 3x10/side",
    ),
];

/// The fixed 4-week starter plan: 12 rows, Mon/Wed/Fri each week.
pub fn default_plan() -> Vec<PlanEntry> {
    let mut entries = Vec::with_capacity(PLAN_ROTATION.len() * dates::PLAN_WEEKS as usize);
    for week in 1..=dates::PLAN_WEEKS as u32 {
        for (dow, name, details) in PLAN_ROTATION {
            entries.push(PlanEntry {
                week,
                dow,
                name: name.to_string(),
                details: details.to_string(),
            });
        }
    }
    entries
}

/// First-run defaults. Three independent, individually idempotent
/// steps: the profile is inserted only if absent, the plan only when
/// the table is empty, each default goal only if its key is unset.
pub fn seed_defaults(db: &Database, name: Option<&str>) -> Result<()> {
    db.insert_profile_if_absent(name.unwrap_or("You"), dates::today())?;

    if db.plan_count()? == 0 {
        db.insert_plan_entries(&default_plan())?;
    }

    for (key, value, unit) in DEFAULT_GOALS {
        db.insert_goal_if_absent(key, value, unit)?;
    }

    Ok(())
}
