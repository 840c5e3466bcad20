use std::collections::HashMap;

use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{Condition, DailyTotal, FoodItem, MealCategory, PlanEntry};
use crate::recommender::constants::*;
use crate::recommender::needs::NutritionNeeds;
use crate::recommender::ranking::{build_pools, rank_foods, ScoredFood};

/// Round a nutrition value to one decimal for plan rows.
#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Draw one day's meals: one uniform pick per fixed meal slot, with
/// replacement. No exclusion state is carried, so repeats are expected.
fn assemble_day<R: Rng>(
    day: u32,
    pools: &HashMap<MealCategory, Vec<ScoredFood>>,
    rng: &mut R,
) -> Result<Vec<PlanEntry>> {
    let mut rows = Vec::with_capacity(MEAL_ORDER.len());

    for meal in MEAL_ORDER {
        let pool = pools.get(&meal).filter(|p| !p.is_empty());
        let pool = pool.ok_or(PlanError::EmptyCatalog)?;

        let chosen = &pool[rng.gen_range(0..pool.len())].food;
        rows.push(PlanEntry {
            day,
            meal,
            food: chosen.name.clone(),
            calories: round1(chosen.calories),
            protein: round1(chosen.protein),
            carbs: round1(chosen.carbs),
            fat: round1(chosen.fat),
        });
    }

    Ok(rows)
}

/// Generate the 30-day plan and its per-day totals.
///
/// Ranks the catalog, builds the candidate pools, then stacks 30 days of
/// 4 draws each. The caller owns the generator, so a fixed seed plus a
/// fixed catalog reproduces the plan exactly.
///
/// Fails with `EmptyCatalog` when a pool is empty even after the
/// whole-catalog fallback, which only happens when the usable catalog
/// (post condition filter) is empty.
pub fn generate_plan<R: Rng>(
    catalog: &[FoodItem],
    needs: &NutritionNeeds,
    condition: Condition,
    rng: &mut R,
) -> Result<(Vec<PlanEntry>, Vec<DailyTotal>)> {
    let ranked = rank_foods(catalog, needs, condition);
    if ranked.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }

    let pools = build_pools(&ranked, DEFAULT_TOP_K);

    let mut plan = Vec::with_capacity((PLAN_DAYS as usize) * MEAL_ORDER.len());
    for day in 1..=PLAN_DAYS {
        plan.extend(assemble_day(day, &pools, rng)?);
    }

    let totals = daily_totals(&plan);
    Ok((plan, totals))
}

/// Per-day sums of the four nutrition fields.
pub fn daily_totals(plan: &[PlanEntry]) -> Vec<DailyTotal> {
    let mut totals: Vec<DailyTotal> = Vec::new();

    for row in plan {
        match totals.last_mut() {
            Some(t) if t.day == row.day => {
                t.calories += row.calories;
                t.protein += row.protein;
                t.carbs += row.carbs;
                t.fat += row.fat;
            }
            _ => totals.push(DailyTotal {
                day: row.day,
                calories: row.calories,
                protein: row.protein,
                carbs: row.carbs,
                fat: row.fat,
            }),
        }
    }

    totals
}
