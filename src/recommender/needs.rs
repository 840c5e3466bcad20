use serde::{Deserialize, Serialize};

use crate::models::{Goal, Profile};
use crate::recommender::constants::*;

/// Daily calorie and macro targets derived from a profile.
///
/// Computed once per request and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionNeeds {
    #[serde(rename = "Calories")]
    pub calories: u32,

    #[serde(rename = "Protein (g)")]
    pub protein: u32,

    #[serde(rename = "Carbs (g)")]
    pub carbs: u32,

    #[serde(rename = "Fat (g)")]
    pub fat: u32,
}

impl NutritionNeeds {
    /// Targets in ranking order: calories, protein, carbs, fat.
    #[inline]
    pub fn targets(&self) -> [f64; 4] {
        [
            self.calories as f64,
            self.protein as f64,
            self.carbs as f64,
            self.fat as f64,
        ]
    }
}

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// The male and non-male branches differ by a constant 166 kcal.
pub fn mifflin_st_jeor(age: u32, weight_kg: f64, height_cm: f64, male: bool) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    if male { base + 5.0 } else { base - 161.0 }
}

/// Compute daily needs from biometrics and a goal.
///
/// Unknown gender strings take the non-male branch; unknown activity
/// levels take the sedentary multiplier. Macros derive from the
/// pre-floor calorie value; only the calorie output itself is floored
/// at 1200.
pub fn compute_needs(
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    gender: &str,
    activity_level: &str,
    goal: Goal,
) -> NutritionNeeds {
    let male = gender.trim().eq_ignore_ascii_case("male");
    let bmr = mifflin_st_jeor(age, weight_kg, height_cm, male);

    let mut calories = bmr * activity_factor(activity_level);
    if goal == Goal::WeightLoss {
        calories -= WEIGHT_LOSS_DEFICIT;
    }

    let protein = PROTEIN_G_PER_KG * weight_kg;
    let carbs = CARB_CALORIE_SHARE * calories / CARB_KCAL_PER_G;
    let fat = FAT_CALORIE_SHARE * calories / FAT_KCAL_PER_G;

    NutritionNeeds {
        calories: calories.max(CALORIE_FLOOR).round() as u32,
        protein: protein.round() as u32,
        carbs: carbs.round() as u32,
        fat: fat.round() as u32,
    }
}

/// Compute needs straight from a profile.
pub fn needs_for_profile(profile: &Profile, goal: Goal) -> NutritionNeeds {
    compute_needs(
        profile.age,
        profile.weight,
        profile.height,
        &profile.gender,
        &profile.activity_level,
        goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_vs_other_gap() {
        let male = mifflin_st_jeor(30, 70.0, 175.0, true);
        let other = mifflin_st_jeor(30, 70.0, 175.0, false);
        assert!((male - other - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_scenario() {
        // BMR = 10*70 + 6.25*178 - 5*30 + 5 = 1667.5
        // calories = 1667.5 * 1.2 - 500 = 1501
        let needs = compute_needs(30, 70.0, 178.0, "male", "sedentary", Goal::WeightLoss);
        assert_eq!(needs.calories, 1501);
        assert_eq!(needs.protein, 56);
        assert_eq!(needs.carbs, 188);
        assert_eq!(needs.fat, 42);
    }

    #[test]
    fn test_calorie_floor() {
        // Tiny frame + weight loss pushes the formula under 1200.
        let needs = compute_needs(80, 35.0, 140.0, "female", "sedentary", Goal::WeightLoss);
        assert_eq!(needs.calories, 1200);
    }

    #[test]
    fn test_gender_case_insensitive_and_default() {
        let upper = compute_needs(30, 70.0, 175.0, "MALE", "sedentary", Goal::Maintenance);
        let lower = compute_needs(30, 70.0, 175.0, "male", "sedentary", Goal::Maintenance);
        assert_eq!(upper, lower);

        // Unrecognized gender takes the non-male branch.
        let unknown = compute_needs(30, 70.0, 175.0, "nonbinary", "sedentary", Goal::Maintenance);
        let female = compute_needs(30, 70.0, 175.0, "female", "sedentary", Goal::Maintenance);
        assert_eq!(unknown, female);
    }

    #[test]
    fn test_deterministic() {
        let a = compute_needs(45, 82.5, 169.0, "female", "moderate", Goal::WeightLoss);
        let b = compute_needs(45, 82.5, 169.0, "female", "moderate", Goal::WeightLoss);
        assert_eq!(a, b);
    }

    #[test]
    fn test_maintenance_keeps_deficit_off() {
        let loss = compute_needs(30, 70.0, 178.0, "male", "sedentary", Goal::WeightLoss);
        let keep = compute_needs(30, 70.0, 178.0, "male", "sedentary", Goal::Maintenance);
        assert_eq!(keep.calories, loss.calories + 500);
    }
}
