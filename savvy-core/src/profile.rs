//! Per-user profile: spending limits, savings goal, cached streaks

use serde::{Deserialize, Serialize};

/// User-editable monthly thresholds. Defaults are applied when the
/// profile document is first created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "junkFoodLimit")]
    pub junk_food_limit: f64,
    #[serde(rename = "impulseSpendingLimit")]
    pub impulse_spending_limit: f64,
    #[serde(rename = "savingsGoal")]
    pub savings_goal: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            junk_food_limit: 2000.0,
            impulse_spending_limit: 10000.0,
            savings_goal: 5000.0,
        }
    }
}

/// Partial settings edit. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(rename = "junkFoodLimit")]
    pub junk_food_limit: Option<f64>,
    #[serde(rename = "impulseSpendingLimit")]
    pub impulse_spending_limit: Option<f64>,
    #[serde(rename = "savingsGoal")]
    pub savings_goal: Option<f64>,
}

impl UserProfile {
    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(v) = patch.junk_food_limit {
            self.junk_food_limit = v;
        }
        if let Some(v) = patch.impulse_spending_limit {
            self.impulse_spending_limit = v;
        }
        if let Some(v) = patch.savings_goal {
            self.savings_goal = v;
        }
    }
}

/// Consecutive-day abstinence counters. The persisted copy is a cache of
/// the last streak computation; the transaction log stays authoritative
/// and streaks are recomputed from it on every load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Streaks {
    #[serde(rename = "noJunkFood")]
    pub no_junk_food: i64,
    #[serde(rename = "noImpulseSpending")]
    pub no_impulse_spending: i64,
}
