use nutri_plan_rs::models::Goal;
use nutri_plan_rs::recommender::{compute_needs, mifflin_st_jeor};

#[test]
fn test_calories_never_below_floor() {
    let cases = [
        (25u32, 50.0, 160.0, "female", "sedentary"),
        (80, 35.0, 140.0, "female", "sedentary"),
        (90, 40.0, 145.0, "other", "light"),
        (30, 70.0, 175.0, "male", "sedentary"),
    ];

    for (age, weight, height, gender, activity) in cases {
        let needs = compute_needs(age, weight, height, gender, activity, Goal::WeightLoss);
        assert!(
            needs.calories >= 1200,
            "floor violated for age={age} weight={weight}: {}",
            needs.calories
        );
    }
}

#[test]
fn test_needs_deterministic() {
    let a = compute_needs(42, 77.7, 181.3, "Male", "moderate", Goal::WeightLoss);
    let b = compute_needs(42, 77.7, 181.3, "Male", "moderate", Goal::WeightLoss);
    assert_eq!(a, b);
}

#[test]
fn test_bmr_gender_gap_is_166() {
    for (age, weight, height) in [(20u32, 60.0, 165.0), (50, 90.0, 185.0)] {
        let male = mifflin_st_jeor(age, weight, height, true);
        let other = mifflin_st_jeor(age, weight, height, false);
        assert!((male - other - 166.0).abs() < 1e-9);
    }
}

#[test]
fn test_reference_male_sedentary_weight_loss() {
    // BMR = 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
    // calories = 1648.75 * 1.2 - 500 = 1478.5 -> 1479 rounded
    let needs = compute_needs(30, 70.0, 175.0, "male", "sedentary", Goal::WeightLoss);
    assert_eq!(needs.calories, 1479);
    assert_eq!(needs.protein, 56); // 0.8 * 70
    assert_eq!(needs.carbs, 185); // 0.50 * 1478.5 / 4
    assert_eq!(needs.fat, 41); // 0.25 * 1478.5 / 9
}

#[test]
fn test_unknown_activity_defaults_to_sedentary() {
    let known = compute_needs(30, 70.0, 175.0, "male", "sedentary", Goal::Maintenance);
    let unknown = compute_needs(30, 70.0, 175.0, "male", "aerobic dancing", Goal::Maintenance);
    assert_eq!(known, unknown);
}

#[test]
fn test_activity_multipliers_ordered() {
    let levels = ["sedentary", "light", "moderate", "active", "very_active"];
    let mut last = 0u32;
    for level in levels {
        let needs = compute_needs(30, 70.0, 175.0, "male", level, Goal::Maintenance);
        assert!(
            needs.calories > last,
            "{level} should need more calories than the previous level"
        );
        last = needs.calories;
    }
}
