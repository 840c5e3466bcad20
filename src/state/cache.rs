use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Condition, DailyTotal, PlanEntry, Profile};
use crate::recommender::NutritionNeeds;

/// A generated plan persisted alongside the profile that produced it.
///
/// The cache is advisory: it is reused only while the profile is
/// unchanged, and the core regenerates on demand without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedPlan {
    pub profile: Profile,
    pub needs: NutritionNeeds,
    pub condition: Condition,
    pub plan: Vec<PlanEntry>,
    pub totals: Vec<DailyTotal>,
}

impl CachedPlan {
    /// Whether the cached plan is still valid for this profile.
    pub fn matches(&self, profile: &Profile) -> bool {
        self.profile == *profile
    }
}

/// Load a cached plan if one exists.
///
/// A missing or unreadable-as-JSON file is a cache miss, not an error;
/// the plan is simply regenerated.
pub fn load_cache<P: AsRef<Path>>(path: P) -> Result<Option<CachedPlan>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).ok())
}

/// Save a plan to the cache file.
pub fn save_cache<P: AsRef<Path>>(path: P, cached: &CachedPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(cached)?;
    fs::write(path, json)?;
    Ok(())
}
