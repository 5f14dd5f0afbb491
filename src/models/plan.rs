use serde::{Deserialize, Serialize};

/// One scheduled workout in the fixed 4-week plan, keyed by plan week
/// (1-4) and ISO day of week (Monday = 1 .. Sunday = 7). Seeded once,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub week: u32,
    pub dow: u32,
    pub name: String,
    pub details: String,
}
