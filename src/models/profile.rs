use serde::{Deserialize, Serialize};

/// Biometric and goal inputs for one user.
///
/// Gender, activity level, and goal stay free-form strings; every
/// downstream consumer resolves unrecognized values to a defined default
/// instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

/// Calorie goal fed into the needs calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
}

/// Dietary condition steering the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    WeightLoss,
    Diabetes,
}

impl Condition {
    /// Resolve a free-form goal string.
    ///
    /// Case-insensitive, `-` treated as `_`; `weight_loss`/`weightloss`
    /// select weight loss, anything else selects diabetes.
    pub fn from_goal(goal: &str) -> Self {
        let g = goal.trim().to_lowercase().replace('-', "_");
        if g == "weight_loss" || g == "weightloss" {
            Condition::WeightLoss
        } else {
            Condition::Diabetes
        }
    }

    /// Calorie goal implied by the condition: a 500 kcal deficit for
    /// weight loss, maintenance for diabetes.
    pub fn calorie_goal(self) -> Goal {
        match self {
            Condition::WeightLoss => Goal::WeightLoss,
            Condition::Diabetes => Goal::Maintenance,
        }
    }
}
