use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored workout log row. Append-only; never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a workout. Every numeric field is independently
/// optional; there is no cross-field validation.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration_min: Option<f64>,
    pub distance_km: Option<f64>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
}
