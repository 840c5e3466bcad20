use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::Result;

/// Properties attached to one food-facts entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodFacts {
    #[serde(default)]
    pub rasa: Option<String>,

    #[serde(default)]
    pub virya: Option<String>,

    #[serde(default)]
    pub vipaka: Option<String>,

    #[serde(default)]
    pub dosha_balance: Option<String>,

    #[serde(default)]
    pub ayurvedic_benefits: Option<String>,

    #[serde(default)]
    pub diabetes_safe: bool,

    #[serde(default)]
    pub weight_loss_friendly: bool,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    name: String,
    norm: String,
    facts: FoodFacts,
}

/// One search result, best first.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub facts: FoodFacts,
    pub score: f64,
}

/// In-memory fuzzy index over the food-facts DB. Built once per load.
#[derive(Debug)]
pub struct FactsIndex {
    entries: Vec<IndexEntry>,
}

/// Lowercased, trimmed form used for all matching.
fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Fuzzy score in 0..1: substring hits score high with a length-proximity
/// reward, everything else falls back to token overlap.
fn fuzzy_score(candidate: &str, query: &str) -> f64 {
    if candidate.is_empty() || query.is_empty() {
        return 0.0;
    }

    if candidate.contains(query) {
        return 0.8 + (query.len() as f64 / candidate.len().max(1) as f64 * 0.19).min(0.19);
    }

    let query_tokens: HashSet<&str> = query.split_whitespace().collect();
    let candidate_tokens: HashSet<&str> = candidate.split_whitespace().collect();
    if query_tokens.is_empty() {
        return 0.0;
    }

    let intersection = query_tokens.intersection(&candidate_tokens).count();
    let union = query_tokens.union(&candidate_tokens).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

impl FactsIndex {
    /// Load the facts DB (a JSON object of name -> properties) and build
    /// the normalized index.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let raw: HashMap<String, FoodFacts> = serde_json::from_str(&content)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_entries(raw: HashMap<String, FoodFacts>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(name, facts)| IndexEntry {
                norm: normalize_name(&name),
                name,
                facts,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search the index.
    ///
    /// Primary pass scores by substring/token overlap; when nothing
    /// matches, a loose Jaro-Winkler pass (> 0.7) rescues near-misses at
    /// a flat 0.4. Results sort by score descending, then shorter name
    /// first. `limit` is clamped to 1..=100.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        diabetes_only: bool,
        weight_only: bool,
    ) -> Vec<SearchHit> {
        let limit = limit.clamp(1, 100);
        let nq = normalize_name(query);

        let passes_filters = |facts: &FoodFacts| {
            (!diabetes_only || facts.diabetes_safe) && (!weight_only || facts.weight_loss_friendly)
        };

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = fuzzy_score(&entry.norm, &nq);
                if score <= 0.0 || !passes_filters(&entry.facts) {
                    return None;
                }
                Some(SearchHit {
                    name: entry.name.clone(),
                    facts: entry.facts.clone(),
                    score,
                })
            })
            .collect();

        if hits.is_empty() {
            hits = self
                .entries
                .iter()
                .filter(|entry| {
                    jaro_winkler(&entry.norm, &nq) > 0.7 && passes_filters(&entry.facts)
                })
                .map(|entry| SearchHit {
                    name: entry.name.clone(),
                    facts: entry.facts.clone(),
                    score: 0.4,
                })
                .collect();
        }

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.name.len().cmp(&b.name.len()))
        });

        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> FactsIndex {
        let mut raw = HashMap::new();
        raw.insert(
            "Bitter Gourd".to_string(),
            FoodFacts {
                diabetes_safe: true,
                weight_loss_friendly: true,
                ayurvedic_benefits: Some("Supports glucose balance".to_string()),
                ..Default::default()
            },
        );
        raw.insert(
            "Bitter Gourd Curry".to_string(),
            FoodFacts {
                diabetes_safe: true,
                ..Default::default()
            },
        );
        raw.insert(
            "Jaggery Sweet".to_string(),
            FoodFacts::default(),
        );
        FactsIndex::from_entries(raw)
    }

    #[test]
    fn test_substring_match_prefers_shorter_name() {
        let hits = index().search("bitter gourd", 20, false, false);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Bitter Gourd");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_token_overlap_match() {
        let hits = index().search("sweet", 20, false, false);
        assert!(hits.iter().any(|h| h.name == "Jaggery Sweet"));
    }

    #[test]
    fn test_diabetes_filter() {
        let hits = index().search("sweet", 20, true, false);
        assert!(hits.is_empty() || hits.iter().all(|h| h.facts.diabetes_safe));
    }

    #[test]
    fn test_weight_filter() {
        let hits = index().search("bitter gourd", 20, false, true);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].facts.weight_loss_friendly);
    }

    #[test]
    fn test_fuzzy_rescue_pass() {
        // Typo: no substring or token match, rescued by Jaro-Winkler.
        let hits = index().search("bitter gourde", 20, false, false);
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_limit_clamp() {
        let hits = index().search("bitter gourd", 0, false, false);
        assert_eq!(hits.len(), 1);
    }
}
