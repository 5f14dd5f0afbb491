use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fitplan", version, about = "Exercise + diet starter plan and tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and the 4-week starter plan
    Init {
        /// Your name to personalize the plan
        #[arg(long)]
        name: Option<String>,
    },

    /// Set a goal, e.g. daily_calories or weekly_exercise_minutes
    SetGoal {
        /// Goal key, e.g. daily_calories, daily_protein_g, daily_walk_minutes
        key: String,

        /// Goal value
        value: f64,

        /// Unit label (defaults to the existing unit, or empty)
        #[arg(long)]
        unit: Option<String>,
    },

    /// Log a workout
    AddWorkout {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Type: strength, run, walk, cycle, yoga, ...
        #[arg(long, default_value = "strength")]
        r#type: String,

        /// Minutes
        #[arg(long)]
        duration: Option<f64>,

        /// Kilometers
        #[arg(long)]
        distance: Option<f64>,

        /// Sets
        #[arg(long)]
        sets: Option<i64>,

        /// Reps
        #[arg(long)]
        reps: Option<i64>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Freeform notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Log a meal or snack
    AddMeal {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// breakfast, lunch, dinner, snack
        #[arg(long, default_value = "meal")]
        meal_type: String,

        /// Calories (kcal)
        #[arg(long)]
        calories: Option<f64>,

        /// Protein (g)
        #[arg(long)]
        protein: Option<f64>,

        /// Carbs (g)
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat (g)
        #[arg(long)]
        fat: Option<f64>,

        /// Describe the food items
        #[arg(long)]
        items: Option<String>,
    },

    /// Show today's plan and progress
    Today,

    /// Show this week's summary
    Week,

    /// Show the 4-week starter plan
    Plan,

    /// Export a table to stdout
    Export {
        /// workouts | meals | goals
        table: String,

        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}
