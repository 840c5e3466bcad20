use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Meal category of a catalog row.
///
/// The four fixed planning categories plus `Beverage`; anything else the
/// catalog contains passes through unchanged as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    Beverage,
    Other(String),
}

impl MealCategory {
    /// Normalize a raw category label: trim, title-case, map known synonyms.
    ///
    /// Returns `None` for an empty/whitespace label.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let titled = title_case(trimmed);
        Some(match titled.as_str() {
            "Breakfast" => MealCategory::Breakfast,
            "Lunch" => MealCategory::Lunch,
            "Dinner" => MealCategory::Dinner,
            "Snack" | "Snacks" => MealCategory::Snack,
            "Beverage" | "Beverages" => MealCategory::Beverage,
            _ => MealCategory::Other(titled),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Snack => "Snack",
            MealCategory::Dinner => "Dinner",
            MealCategory::Beverage => "Beverage",
            MealCategory::Other(s) => s,
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as its plain label so plan rows stay flat in CSV and JSON.
impl Serialize for MealCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MealCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        MealCategory::normalize(&label).ok_or_else(|| D::Error::custom("empty meal category"))
    }
}

/// Title-case each whitespace-separated word: first letter upper, rest lower.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A usable food catalog row.
///
/// The four nutrition fields are guaranteed present by the loader; rows
/// that fail numeric coercion never become a `FoodItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub category: Option<MealCategory>,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    pub glycemic_index: Option<f64>,

    pub diabetes_benefit: Option<String>,
}

impl FoodItem {
    /// Calories plus the three macros, in the order the ranker scores them.
    #[inline]
    pub fn nutrition_fields(&self) -> [f64; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }
}
