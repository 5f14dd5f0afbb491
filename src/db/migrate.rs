use anyhow::Result;
use rusqlite::Connection;

/// Idempotent schema creation. Runs on every open; never alters or
/// drops existing data.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profile (
            id         INTEGER PRIMARY KEY CHECK (id = 1),
            name       TEXT,
            start_date TEXT
        );

        CREATE TABLE IF NOT EXISTS goals (
            id         INTEGER PRIMARY KEY,
            key        TEXT UNIQUE NOT NULL,
            value      REAL NOT NULL,
            unit       TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS workouts (
            id           INTEGER PRIMARY KEY,
            date         TEXT NOT NULL,
            type         TEXT NOT NULL,
            duration_min REAL,
            distance_km  REAL,
            sets         INTEGER,
            reps         INTEGER,
            weight_kg    REAL,
            notes        TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS meals (
            id         INTEGER PRIMARY KEY,
            date       TEXT NOT NULL,
            meal_type  TEXT NOT NULL,
            calories   REAL,
            protein_g  REAL,
            carbs_g    REAL,
            fat_g      REAL,
            items      TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS plan_workouts (
            id      INTEGER PRIMARY KEY,
            week    INTEGER NOT NULL,
            dow     INTEGER NOT NULL,
            name    TEXT NOT NULL,
            details TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date);
        CREATE INDEX IF NOT EXISTS idx_meals_date ON meals(date);",
    )?;
    Ok(())
}
