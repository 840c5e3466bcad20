use std::io::Write;

use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use nutri_plan_rs::catalog::load_catalog;
use nutri_plan_rs::models::{Condition, FoodItem, MealCategory};
use nutri_plan_rs::recommender::{generate_plan, NutritionNeeds, DEFAULT_SEED, MEAL_ORDER};
use nutri_plan_rs::PlanError;

fn food(name: &str, category: MealCategory, cal: f64, p: f64, c: f64, f: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        category: Some(category),
        calories: cal,
        protein: p,
        carbs: c,
        fat: f,
        glycemic_index: None,
        diabetes_benefit: None,
    }
}

fn sample_catalog() -> Vec<FoodItem> {
    vec![
        food("Poha", MealCategory::Breakfast, 270.0, 6.5, 50.2, 5.1),
        food("Idli Sambar", MealCategory::Breakfast, 310.0, 11.0, 55.0, 4.0),
        food("Dal Rice", MealCategory::Lunch, 520.0, 18.2, 80.1, 9.9),
        food("Roti Sabzi", MealCategory::Lunch, 450.0, 14.0, 68.0, 11.0),
        food("Peanut Chikki", MealCategory::Snack, 180.0, 6.0, 18.0, 9.5),
        food("Sprout Chaat", MealCategory::Snack, 150.0, 9.0, 22.0, 2.5),
        food("Khichdi", MealCategory::Dinner, 430.0, 15.5, 62.0, 10.2),
        food("Paneer Bhurji", MealCategory::Dinner, 390.0, 22.0, 10.0, 28.0),
    ]
}

fn sample_needs() -> NutritionNeeds {
    NutritionNeeds {
        calories: 1800,
        protein: 90,
        carbs: 225,
        fat: 50,
    }
}

#[test]
fn test_plan_has_120_rows_in_fixed_order() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let (plan, totals) = generate_plan(
        &sample_catalog(),
        &sample_needs(),
        Condition::WeightLoss,
        &mut rng,
    )
    .unwrap();

    assert_eq!(plan.len(), 120);
    assert_eq!(totals.len(), 30);

    let days: Vec<u32> = totals.iter().map(|t| t.day).collect();
    assert_eq!(days, (1..=30).collect::<Vec<u32>>());

    for chunk in plan.chunks(4) {
        for (row, meal) in chunk.iter().zip(MEAL_ORDER) {
            assert_eq!(row.meal, meal);
        }
    }
}

#[test]
fn test_daily_totals_sum_their_rows() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let (plan, totals) = generate_plan(
        &sample_catalog(),
        &sample_needs(),
        Condition::WeightLoss,
        &mut rng,
    )
    .unwrap();

    for total in &totals {
        let rows: Vec<_> = plan.iter().filter(|r| r.day == total.day).collect();
        assert_eq!(rows.len(), 4);
        assert_float_absolute_eq!(total.calories, rows.iter().map(|r| r.calories).sum::<f64>(), 0.05);
        assert_float_absolute_eq!(total.protein, rows.iter().map(|r| r.protein).sum::<f64>(), 0.05);
        assert_float_absolute_eq!(total.carbs, rows.iter().map(|r| r.carbs).sum::<f64>(), 0.05);
        assert_float_absolute_eq!(total.fat, rows.iter().map(|r| r.fat).sum::<f64>(), 0.05);
    }
}

#[test]
fn test_empty_catalog_fails_with_empty_catalog() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let result = generate_plan(&[], &sample_needs(), Condition::WeightLoss, &mut rng);
    assert!(matches!(result, Err(PlanError::EmptyCatalog)));
}

#[test]
fn test_diabetes_plan_only_uses_annotated_foods() {
    let mut catalog = sample_catalog();
    // Annotate one food per category; the rest must never appear.
    for name in ["Poha", "Dal Rice", "Sprout Chaat", "Khichdi"] {
        let item = catalog.iter_mut().find(|f| f.name == name).unwrap();
        item.diabetes_benefit = Some("Helps manage glucose".to_string());
        item.glycemic_index = Some(40.0);
    }

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let (plan, _) = generate_plan(&catalog, &sample_needs(), Condition::Diabetes, &mut rng).unwrap();

    let allowed = ["Poha", "Dal Rice", "Sprout Chaat", "Khichdi"];
    for row in &plan {
        assert!(
            allowed.contains(&row.food.as_str()),
            "unannotated food {} in diabetes plan",
            row.food
        );
    }
}

#[test]
fn test_same_seed_reproduces_plan() {
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);
    let (plan_a, totals_a) = generate_plan(
        &sample_catalog(),
        &sample_needs(),
        Condition::WeightLoss,
        &mut rng_a,
    )
    .unwrap();
    let (plan_b, totals_b) = generate_plan(
        &sample_catalog(),
        &sample_needs(),
        Condition::WeightLoss,
        &mut rng_b,
    )
    .unwrap();

    assert_eq!(plan_a, plan_b);
    assert_eq!(totals_a, totals_b);
}

#[test]
fn test_csv_to_plan_pipeline() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"Food Name,Category,Calories,Protein (g),Carbs (g),Fat (g)\n\
          Poha,Breakfast,270,6.5,50.2,5.1\n\
          Dal Rice,Lunch,520,18.2,80.1,9.9\n\
          Peanut Chikki,Snacks,180,6,18,9.5\n\
          Khichdi,Dinner,430,15.5,62,10.2\n\
          Broken Row,Lunch,not-a-number,1,2,3\n",
    )
    .unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.len(), 4);

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let (plan, totals) =
        generate_plan(&catalog, &sample_needs(), Condition::WeightLoss, &mut rng).unwrap();

    assert_eq!(plan.len(), 120);
    assert_eq!(totals.len(), 30);
    // Snack slot is served by the synonym-normalized "Snacks" row.
    assert!(plan
        .iter()
        .filter(|r| r.meal == MealCategory::Snack)
        .all(|r| r.food == "Peanut Chikki"));
}
