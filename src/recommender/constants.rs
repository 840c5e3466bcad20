use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealCategory;

/// Fixed meal slots of a plan day, in serving order.
pub const MEAL_ORDER: [MealCategory; 4] = [
    MealCategory::Breakfast,
    MealCategory::Lunch,
    MealCategory::Snack,
    MealCategory::Dinner,
];

/// Days in a generated plan.
pub const PLAN_DAYS: u32 = 30;

/// Candidate pool size per meal category.
pub const DEFAULT_TOP_K: usize = 200;

/// Daily calorie target never drops below this.
pub const CALORIE_FLOOR: f64 = 1200.0;

/// Calorie deficit applied for the weight-loss goal.
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Protein target in grams per kg of body weight.
pub const PROTEIN_G_PER_KG: f64 = 0.8;

/// Share of daily calories assigned to carbs, at 4 kcal per gram.
pub const CARB_CALORIE_SHARE: f64 = 0.50;
pub const CARB_KCAL_PER_G: f64 = 4.0;

/// Share of daily calories assigned to fat, at 9 kcal per gram.
pub const FAT_CALORIE_SHARE: f64 = 0.25;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Composite score weights for glycemic-sensitive ranking.
pub const NUTRITION_WEIGHT: f64 = 0.7;
pub const GI_WEIGHT: f64 = 0.3;

/// GI score used when the catalog carries no glycemic-index data.
pub const NEUTRAL_GI_SCORE: f64 = 0.5;

/// Default seed for the plan generator.
///
/// One generator is seeded per plan request, so equal seeds and equal
/// catalogs reproduce the same plan.
pub const DEFAULT_SEED: u64 = 42;

/// Activity multiplier used when the level string is unrecognized.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Map from lowercase activity level to calorie multiplier.
pub static ACTIVITY_FACTORS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("sedentary", 1.2);
    m.insert("light", 1.375);
    m.insert("moderate", 1.55);
    m.insert("active", 1.725);
    m.insert("very_active", 1.9);
    m
});

/// Get the activity multiplier for a level, case-insensitively.
pub fn activity_factor(level: &str) -> f64 {
    *ACTIVITY_FACTORS
        .get(level.to_lowercase().as_str())
        .unwrap_or(&DEFAULT_ACTIVITY_FACTOR)
}
