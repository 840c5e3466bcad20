use serde::{Deserialize, Serialize};

use crate::models::MealCategory;

/// One meal's chosen food for one plan day.
///
/// Field renames keep the original dataset column headers in CSV export
/// and in the cached-plan JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    #[serde(rename = "Day")]
    pub day: u32,

    #[serde(rename = "Meal")]
    pub meal: MealCategory,

    #[serde(rename = "Foods")]
    pub food: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    #[serde(rename = "Carbs (g)")]
    pub carbs: f64,

    #[serde(rename = "Fat (g)")]
    pub fat: f64,
}

/// Sum of the four nutrition fields across one day's meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    #[serde(rename = "Day")]
    pub day: u32,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    #[serde(rename = "Carbs (g)")]
    pub carbs: f64,

    #[serde(rename = "Fat (g)")]
    pub fat: f64,
}
