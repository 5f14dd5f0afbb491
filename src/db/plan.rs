use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::models::PlanEntry;

use super::Database;

impl Database {
    pub fn plan_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM plan_workouts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Bulk-insert the seeded plan in one transaction.
    pub fn insert_plan_entries(&self, entries: &[PlanEntry]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO plan_workouts (week, dow, name, details) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for e in entries {
                stmt.execute(params![e.week, e.dow, e.name, e.details])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// The plan entry for (week, day of week), if any. Duplicate rows
    /// yield an arbitrary one.
    pub fn plan_for(&self, week: u32, dow: u32) -> Result<Option<PlanEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT week, dow, name, details FROM plan_workouts
                 WHERE week = ?1 AND dow = ?2 LIMIT 1",
                params![week, dow],
                |row| {
                    Ok(PlanEntry {
                        week: row.get(0)?,
                        dow: row.get(1)?,
                        name: row.get(2)?,
                        details: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    pub fn list_plan(&self) -> Result<Vec<PlanEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT week, dow, name, details FROM plan_workouts ORDER BY week, dow",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(PlanEntry {
                week: row.get(0)?,
                dow: row.get(1)?,
                name: row.get(2)?,
                details: row.get(3)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
