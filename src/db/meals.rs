use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;

use crate::core::dates;
use crate::models::{Meal, NewMeal};

use super::Database;

/// Calorie and protein sums over some date window.
#[derive(Debug, Clone, Copy)]
pub struct NutritionSums {
    pub calories: f64,
    pub protein_g: f64,
}

impl Database {
    /// Append a meal row. Calories are resolved first: an omitted value
    /// is estimated from the macros when all three are present,
    /// otherwise stored as NULL.
    pub fn insert_meal(&self, m: &NewMeal) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meals (date, meal_type, calories, protein_g, carbs_g, fat_g, items, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                m.date.to_string(),
                m.meal_type,
                m.resolved_calories(),
                m.protein_g,
                m.carbs_g,
                m.fat_g,
                m.items,
                dates::now_stamp(),
            ],
        )?;
        Ok(())
    }

    pub fn list_meals(&self) -> Result<Vec<Meal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, meal_type, calories, protein_g, carbs_g, fat_g, items, created_at
             FROM meals ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MealRow {
                id: row.get(0)?,
                date: row.get(1)?,
                meal_type: row.get(2)?,
                calories: row.get(3)?,
                protein_g: row.get(4)?,
                carbs_g: row.get(5)?,
                fat_g: row.get(6)?,
                items: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    /// Calorie/protein sums for one date. NULL fields count as zero.
    pub fn sum_nutrition(&self, date: NaiveDate) -> Result<NutritionSums> {
        let sums = self.conn.query_row(
            "SELECT COALESCE(SUM(calories), 0), COALESCE(SUM(protein_g), 0)
             FROM meals WHERE date = ?1",
            params![date.to_string()],
            |row| {
                Ok(NutritionSums {
                    calories: row.get(0)?,
                    protein_g: row.get(1)?,
                })
            },
        )?;
        Ok(sums)
    }

    /// Calorie/protein sums over the inclusive date range.
    pub fn sum_nutrition_between(&self, from: NaiveDate, to: NaiveDate) -> Result<NutritionSums> {
        let sums = self.conn.query_row(
            "SELECT COALESCE(SUM(calories), 0), COALESCE(SUM(protein_g), 0)
             FROM meals WHERE date BETWEEN ?1 AND ?2",
            params![from.to_string(), to.to_string()],
            |row| {
                Ok(NutritionSums {
                    calories: row.get(0)?,
                    protein_g: row.get(1)?,
                })
            },
        )?;
        Ok(sums)
    }
}

struct MealRow {
    id: i64,
    date: String,
    meal_type: String,
    calories: Option<f64>,
    protein_g: Option<f64>,
    carbs_g: Option<f64>,
    fat_g: Option<f64>,
    items: Option<String>,
    created_at: String,
}

fn row_to_meal(r: MealRow) -> Result<Meal> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(Meal {
        id: r.id,
        date: r.date.parse()?,
        meal_type: r.meal_type,
        calories: r.calories,
        protein_g: r.protein_g,
        carbs_g: r.carbs_g,
        fat_g: r.fat_g,
        items: r.items,
        created_at,
    })
}
