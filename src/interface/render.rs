use crate::models::{DailyTotal, PlanEntry};
use crate::recommender::NutritionNeeds;
use crate::search::SearchHit;

/// Display the computed daily targets.
pub fn display_needs(needs: &NutritionNeeds) {
    println!();
    println!("=== Daily Targets ===");
    println!("Calories: {} kcal", needs.calories);
    println!("Protein:  {} g", needs.protein);
    println!("Carbs:    {} g", needs.carbs);
    println!("Fat:      {} g", needs.fat);
    println!();
}

/// Display the plan grouped by day, one line per meal.
pub fn display_plan(plan: &[PlanEntry], totals: &[DailyTotal]) {
    if plan.is_empty() {
        println!("No plan rows to display.");
        return;
    }

    let max_name_len = plan.iter().map(|r| r.food.len()).max().unwrap_or(10);

    println!();
    println!("=== 30-Day Meal Plan ===");

    let mut current_day = 0;
    for row in plan {
        if row.day != current_day {
            current_day = row.day;
            println!();
            println!("--- Day {} ---", current_day);
        }
        println!(
            "{:>9}: {:<width$}  {:>6.1} cal | P {:>5.1} g | C {:>5.1} g | F {:>5.1} g",
            row.meal.to_string(),
            row.food,
            row.calories,
            row.protein,
            row.carbs,
            row.fat,
            width = max_name_len
        );
    }

    println!();
    println!("--- Daily Totals ---");
    for total in totals {
        println!(
            "Day {:>2}: {:>7.1} cal | P {:>6.1} g | C {:>6.1} g | F {:>6.1} g",
            total.day, total.calories, total.protein, total.carbs, total.fat
        );
    }
    println!();
}

/// Display food-facts search results.
pub fn display_search_hits(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No foods matched '{}'.", query);
        return;
    }

    println!();
    println!("=== {} matches for '{}' ===", hits.len(), query);
    println!();

    for hit in hits {
        let mut tags = Vec::new();
        if hit.facts.diabetes_safe {
            tags.push("diabetes-safe");
        }
        if hit.facts.weight_loss_friendly {
            tags.push("weight-loss-friendly");
        }
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        println!("  {} (score {:.2}){}", hit.name, hit.score, tags_str);
        if let Some(benefits) = &hit.facts.ayurvedic_benefits {
            println!("      {}", benefits);
        }
    }

    println!();
}
