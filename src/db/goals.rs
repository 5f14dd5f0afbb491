use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::core::dates;
use crate::models::Goal;

use super::Database;

impl Database {
    /// Insert or replace the goal for `key`. When `unit` is omitted the
    /// previously stored unit is carried forward (empty string if the
    /// key is new).
    pub fn upsert_goal(&self, key: &str, value: f64, unit: Option<&str>) -> Result<()> {
        let unit = match unit {
            Some(u) => u.to_string(),
            None => self
                .conn
                .query_row("SELECT unit FROM goals WHERE key = ?1", params![key], |row| {
                    row.get(0)
                })
                .optional()?
                .unwrap_or_default(),
        };
        self.conn.execute(
            "INSERT INTO goals (key, value, unit, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 unit = excluded.unit,
                 updated_at = excluded.updated_at",
            params![key, value, unit, dates::now_stamp()],
        )?;
        Ok(())
    }

    /// Seed helper: the insert is skipped when the key already exists.
    pub fn insert_goal_if_absent(&self, key: &str, value: f64, unit: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO goals (key, value, unit, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![key, value, unit, dates::now_stamp()],
        )?;
        Ok(())
    }

    /// Total lookup: an unknown key yields `(0.0, "")` rather than an
    /// error.
    pub fn goal_value(&self, key: &str) -> Result<(f64, String)> {
        let row: Option<(f64, String)> = self
            .conn
            .query_row(
                "SELECT value, unit FROM goals WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(row.unwrap_or((0.0, String::new())))
    }

    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, key, value, unit, updated_at FROM goals ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GoalRow {
                id: row.get(0)?,
                key: row.get(1)?,
                value: row.get(2)?,
                unit: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;

        let mut goals = Vec::new();
        for row in rows {
            goals.push(row_to_goal(row?)?);
        }
        Ok(goals)
    }
}

struct GoalRow {
    id: i64,
    key: String,
    value: f64,
    unit: String,
    updated_at: String,
}

fn row_to_goal(r: GoalRow) -> Result<Goal> {
    let updated_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.updated_at)?.with_timezone(&Utc);
    Ok(Goal {
        id: r.id,
        key: r.key,
        value: r.value,
        unit: r.unit,
        updated_at,
    })
}
