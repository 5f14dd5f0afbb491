use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

use crate::models::Profile;

use super::Database;

impl Database {
    /// Insert the singleton profile row if none exists. Returns true if
    /// a row was written. An existing profile is never overwritten.
    pub fn insert_profile_if_absent(&self, name: &str, start_date: NaiveDate) -> Result<bool> {
        let exists: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM profile WHERE id = 1", [], |row| row.get(0))
            .optional()?;
        if exists.is_some() {
            return Ok(false);
        }
        self.conn.execute(
            "INSERT INTO profile (id, name, start_date) VALUES (1, ?1, ?2)",
            params![name, start_date.to_string()],
        )?;
        Ok(true)
    }

    pub fn get_profile(&self) -> Result<Option<Profile>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT name, start_date FROM profile WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        match row {
            Some((name, start_date)) => Ok(Some(Profile {
                name,
                start_date: start_date.parse()?,
            })),
            None => Ok(None),
        }
    }
}
