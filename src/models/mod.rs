pub mod goal;
pub mod meal;
pub mod plan;
pub mod profile;
pub mod workout;

pub use goal::Goal;
pub use meal::{Meal, NewMeal};
pub use plan::PlanEntry;
pub use profile::Profile;
pub use workout::{NewWorkout, Workout};
