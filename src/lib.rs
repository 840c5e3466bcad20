pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod recommender;
pub mod search;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{DailyTotal, FoodItem, MealCategory, PlanEntry};
