mod goals;
mod meals;
mod migrate;
mod plan;
mod profile;
mod workouts;

pub use meals::NutritionSums;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        Ok(db)
    }
}

/// Data directory: `FITPLAN_HOME` if set, otherwise the directory the
/// executable lives in.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("FITPLAN_HOME") {
        return Ok(PathBuf::from(home));
    }
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

pub fn db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("fitplan.db"))
}
