use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;

use crate::core::dates;
use crate::models::{NewWorkout, Workout};

use super::Database;

impl Database {
    pub fn insert_workout(&self, w: &NewWorkout) -> Result<()> {
        self.conn.execute(
            "INSERT INTO workouts (date, type, duration_min, distance_km, sets, reps, weight_kg, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                w.date.to_string(),
                w.workout_type,
                w.duration_min,
                w.distance_km,
                w.sets,
                w.reps,
                w.weight_kg,
                w.notes,
                dates::now_stamp(),
            ],
        )?;
        Ok(())
    }

    pub fn list_workouts(&self) -> Result<Vec<Workout>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, type, duration_min, distance_km, sets, reps, weight_kg, notes, created_at
             FROM workouts ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(WorkoutRow {
                id: row.get(0)?,
                date: row.get(1)?,
                workout_type: row.get(2)?,
                duration_min: row.get(3)?,
                distance_km: row.get(4)?,
                sets: row.get(5)?,
                reps: row.get(6)?,
                weight_kg: row.get(7)?,
                notes: row.get(8)?,
                created_at: row.get(9)?,
            })
        })?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row_to_workout(row?)?);
        }
        Ok(workouts)
    }

    /// Total workout minutes for one date. NULL durations count as zero.
    pub fn sum_workout_minutes(&self, date: NaiveDate) -> Result<f64> {
        let total = self.conn.query_row(
            "SELECT COALESCE(SUM(duration_min), 0) FROM workouts WHERE date = ?1",
            params![date.to_string()],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Total workout minutes over the inclusive date range.
    pub fn sum_workout_minutes_between(&self, from: NaiveDate, to: NaiveDate) -> Result<f64> {
        let total = self.conn.query_row(
            "SELECT COALESCE(SUM(duration_min), 0) FROM workouts WHERE date BETWEEN ?1 AND ?2",
            params![from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}

struct WorkoutRow {
    id: i64,
    date: String,
    workout_type: String,
    duration_min: Option<f64>,
    distance_km: Option<f64>,
    sets: Option<i64>,
    reps: Option<i64>,
    weight_kg: Option<f64>,
    notes: Option<String>,
    created_at: String,
}

fn row_to_workout(r: WorkoutRow) -> Result<Workout> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(Workout {
        id: r.id,
        date: r.date.parse()?,
        workout_type: r.workout_type,
        duration_min: r.duration_min,
        distance_km: r.distance_km,
        sets: r.sets,
        reps: r.reps,
        weight_kg: r.weight_kg,
        notes: r.notes,
        created_at,
    })
}
