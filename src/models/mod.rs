mod food;
mod plan;
mod profile;

pub use food::{FoodItem, MealCategory};
pub use plan::{DailyTotal, PlanEntry};
pub use profile::{Condition, Goal, Profile};
