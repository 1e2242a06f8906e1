//! Goal progress math backing the progress bars.

use crate::analytics::{percent_of_total, Analysis};
use crate::profile::UserProfile;

/// Progress toward each monthly goal, as raw percentages. Values can
/// exceed 100 (over budget); rendering clamps the bar, not the number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// Junk-food spending vs. its limit
    pub junk_pct: f64,
    /// Impulse spending vs. its limit
    pub impulse_pct: f64,
    /// Share of the savings goal still intact (0 when spending has
    /// already passed the goal)
    pub savings_pct: f64,
}

pub fn compute_goal_progress(analysis: &Analysis, profile: &UserProfile) -> GoalProgress {
    let savings_pct = if analysis.total_spent < profile.savings_goal {
        percent_of_total(profile.savings_goal - analysis.total_spent, profile.savings_goal)
    } else {
        0.0
    };

    GoalProgress {
        junk_pct: percent_of_total(analysis.junk_food_spending, profile.junk_food_limit),
        impulse_pct: percent_of_total(analysis.impulse_spending, profile.impulse_spending_limit),
        savings_pct,
    }
}
