use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Singleton owner record. Created once by `init`; `start_date` anchors
/// plan-week numbering and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub start_date: NaiveDate,
}

impl Profile {
    /// Stand-in used when no profile has been seeded yet.
    pub fn fallback() -> Self {
        Self {
            name: "You".to_string(),
            start_date: Local::now().date_naive(),
        }
    }
}
