use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named target value with a unit label. Keys are open strings, not a
/// closed set; anything the user sets is tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub key: String,
    pub value: f64,
    pub unit: String,
    pub updated_at: DateTime<Utc>,
}
