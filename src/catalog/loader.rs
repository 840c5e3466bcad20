use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{FoodItem, MealCategory};

/// One CSV row before normalization. Every field is optional text so a
/// ragged or dirty row deserializes instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Food Name", default)]
    name: Option<String>,

    #[serde(rename = "Category", default)]
    category: Option<String>,

    #[serde(rename = "Calories", default)]
    calories: Option<String>,

    #[serde(rename = "Protein (g)", default)]
    protein: Option<String>,

    #[serde(rename = "Carbs (g)", default)]
    carbs: Option<String>,

    #[serde(rename = "Fat (g)", default)]
    fat: Option<String>,

    #[serde(rename = "Glycemic Index Estimate", default)]
    glycemic_index: Option<String>,

    #[serde(rename = "Diabetes Management Benefits", default)]
    diabetes_benefit: Option<String>,
}

/// Coerce a text cell to a number; unparseable or empty becomes absent.
fn coerce_numeric(cell: Option<&String>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
}

/// Non-empty trimmed text, or absent.
fn coerce_text(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl RawRecord {
    /// Normalize the row into a usable catalog item.
    ///
    /// Rows missing any of the four nutrition fields after coercion are
    /// dropped (`None`); a missing glycemic index is tolerated.
    fn normalize(self) -> Option<FoodItem> {
        let calories = coerce_numeric(self.calories.as_ref())?;
        let protein = coerce_numeric(self.protein.as_ref())?;
        let carbs = coerce_numeric(self.carbs.as_ref())?;
        let fat = coerce_numeric(self.fat.as_ref())?;

        let glycemic_index = coerce_numeric(self.glycemic_index.as_ref());

        Some(FoodItem {
            name: self.name.map(|n| n.trim().to_string()).unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .and_then(MealCategory::normalize),
            calories,
            protein,
            carbs,
            fat,
            glycemic_index,
            diabetes_benefit: coerce_text(self.diabetes_benefit),
        })
    }
}

/// Load and normalize the food catalog from a CSV file.
///
/// Dropping rows with incomplete nutrition data is data-quality policy,
/// not an error; only IO and CSV structural problems surface.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut catalog = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        if let Some(item) = record?.normalize() {
            catalog.push(item);
        }
    }

    Ok(catalog)
}
