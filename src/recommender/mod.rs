pub mod assembly;
pub mod constants;
pub mod needs;
pub mod ranking;

pub use assembly::{daily_totals, generate_plan};
pub use constants::*;
pub use needs::{compute_needs, mifflin_st_jeor, needs_for_profile, NutritionNeeds};
pub use ranking::{build_pools, nutrition_score, rank_foods, ScoredFood};
