use std::collections::HashMap;

use crate::models::{Condition, FoodItem, MealCategory};
use crate::recommender::constants::*;
use crate::recommender::needs::NutritionNeeds;

/// A catalog row with its ranking scores. Exists only for the duration
/// of one ranking pass.
#[derive(Debug, Clone)]
pub struct ScoredFood {
    pub food: FoodItem,
    pub nutrition_score: f64,
    pub gi_score: Option<f64>,
    pub score: f64,
}

/// Closeness of a food to a quarter of the daily targets.
///
/// Mean relative absolute deviation over the fields with a positive
/// target, subtracted from 1. Unbounded below zero for large overshoots;
/// 0.0 when no field has a positive target.
pub fn nutrition_score(food: &FoodItem, needs: &NutritionNeeds) -> f64 {
    let mut deviation_sum = 0.0;
    let mut count = 0u32;

    for (value, target) in food.nutrition_fields().iter().zip(needs.targets()) {
        if target > 0.0 {
            let quarter = target / 4.0;
            deviation_sum += (value - quarter).abs() / quarter;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        1.0 - deviation_sum / count as f64
    }
}

/// Score and rank the catalog against the needs, descending by score.
///
/// For the diabetes condition, foods without a diabetes-benefit
/// annotation are excluded outright, and the score blends in a
/// glycemic-index component. The sort is stable, so ties keep catalog
/// order.
pub fn rank_foods(
    catalog: &[FoodItem],
    needs: &NutritionNeeds,
    condition: Condition,
) -> Vec<ScoredFood> {
    let candidates: Vec<&FoodItem> = match condition {
        Condition::Diabetes => catalog
            .iter()
            .filter(|f| f.diabetes_benefit.is_some())
            .collect(),
        Condition::WeightLoss => catalog.iter().collect(),
    };

    // Neutral 0.5 applies to the whole pool when no candidate carries GI
    // data, and to individual rows missing it otherwise.
    let max_gi = candidates
        .iter()
        .filter_map(|f| f.glycemic_index)
        .fold(f64::NEG_INFINITY, f64::max);
    let has_gi = max_gi > 0.0;

    let mut scored: Vec<ScoredFood> = candidates
        .into_iter()
        .map(|food| {
            let ns = nutrition_score(food, needs);
            let (gi_score, score) = match condition {
                Condition::WeightLoss => (None, ns),
                Condition::Diabetes => {
                    let gi = if has_gi {
                        food.glycemic_index
                            .map(|g| 1.0 - (g / max_gi).clamp(0.0, 1.0))
                            .unwrap_or(NEUTRAL_GI_SCORE)
                    } else {
                        NEUTRAL_GI_SCORE
                    };
                    (Some(gi), NUTRITION_WEIGHT * ns + GI_WEIGHT * gi)
                }
            };
            ScoredFood {
                food: food.clone(),
                nutrition_score: ns,
                gi_score,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Slice the ranked catalog into one top-K pool per fixed meal category.
///
/// A category with no matching rows falls back to the entire ranked
/// catalog, so every pool is non-empty whenever the ranking is.
pub fn build_pools(
    ranked: &[ScoredFood],
    top_k: usize,
) -> HashMap<MealCategory, Vec<ScoredFood>> {
    let mut pools = HashMap::new();

    for meal in MEAL_ORDER {
        let mut pool: Vec<ScoredFood> = ranked
            .iter()
            .filter(|s| s.food.category.as_ref() == Some(&meal))
            .cloned()
            .collect();

        if pool.is_empty() {
            pool = ranked.to_vec();
        }

        pool.truncate(top_k);
        pools.insert(meal, pool);
    }

    pools
}
