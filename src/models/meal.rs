use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored meal log row. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a meal.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub date: NaiveDate,
    pub meal_type: String,
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub items: Option<String>,
}

impl NewMeal {
    /// Calories to store: the given value, or the Atwater estimate
    /// (4/4/9 kcal per gram) when calories are omitted but all three
    /// macros are present. Any missing macro leaves calories absent.
    pub fn resolved_calories(&self) -> Option<f64> {
        match (self.calories, self.protein_g, self.carbs_g, self.fat_g) {
            (Some(kcal), _, _, _) => Some(kcal),
            (None, Some(protein), Some(carbs), Some(fat)) => {
                Some(4.0 * protein + 4.0 * carbs + 9.0 * fat)
            }
            _ => None,
        }
    }
}
