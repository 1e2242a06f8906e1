//! savvy-core: Pure derived-analytics and streak engine for the Savvy ledger
//!
//! Everything here is a pure function over an in-memory transaction list
//! plus a reference date. Storage and the AI classifier live in the
//! savvy-store and savvy-ai crates.

pub mod analytics;
pub mod badges;
pub mod goals;
pub mod profile;
pub mod streaks;
pub mod time;
pub mod transaction;

pub use analytics::{
    compute_analysis, junk_food_count_last_week, junk_food_names, percent_of_total, Analysis,
};
pub use badges::{challenges, unlocked_badges, Badge, Challenge};
pub use goals::{compute_goal_progress, GoalProgress};
pub use profile::{ProfilePatch, Streaks, UserProfile};
pub use streaks::compute_streaks;
pub use time::{days_in_month, same_month, today_in_tz};
pub use transaction::{Category, Classification, FoodTag, Transaction};

/// Junk-food purchases in the trailing week above this count trigger the
/// wellness alert.
pub const JUNK_ALERT_THRESHOLD: usize = 2;
