//! Badge and challenge gates.
//!
//! Plain predicates over current streaks and analysis, re-evaluated on
//! every render. No persistence and no hysteresis: a badge disappears
//! again if the underlying ratio crosses back over its threshold.

use crate::analytics::Analysis;
use crate::goals::GoalProgress;
use crate::profile::Streaks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    HealthyWeek,
    MindfulMonth,
    SuperSaver,
}

impl Badge {
    pub fn name(&self) -> &'static str {
        match self {
            Badge::HealthyWeek => "Healthy Week",
            Badge::MindfulMonth => "Mindful Month",
            Badge::SuperSaver => "Super Saver",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Badge::HealthyWeek => "🥗",
            Badge::MindfulMonth => "🧠",
            Badge::SuperSaver => "💰",
        }
    }
}

pub fn unlocked_badges(streaks: &Streaks, analysis: &Analysis) -> Vec<Badge> {
    let mut unlocked = Vec::new();
    if streaks.no_junk_food >= 7 {
        unlocked.push(Badge::HealthyWeek);
    }
    if streaks.no_impulse_spending >= 30 {
        unlocked.push(Badge::MindfulMonth);
    }
    if analysis.total_spent > 0.0
        && analysis.unnecessary_spending / analysis.total_spent < 0.10
    {
        unlocked.push(Badge::SuperSaver);
    }
    unlocked
}

/// A behavioral challenge with a completion gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

/// The standing challenge set shown on the goals screen.
pub fn challenges(streaks: &Streaks, progress: &GoalProgress) -> Vec<Challenge> {
    vec![
        Challenge {
            name: "1 Week No Late-Night Orders",
            icon: "🌙",
            description: "Avoid junk food orders for 7 days straight.",
            completed: streaks.no_junk_food >= 7,
        },
        Challenge {
            name: "Impulse-Free Weekend",
            icon: "🛍️",
            description: "Make no impulse purchases from Friday to Sunday.",
            completed: streaks.no_impulse_spending >= 3,
        },
        Challenge {
            name: "Under Budget Hero",
            icon: "🎯",
            description: "Keep your total spending below your monthly savings goal.",
            completed: progress.savings_pct >= 100.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn analysis(total: f64, unnecessary: f64) -> Analysis {
        let mut a = Analysis::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        a.total_spent = total;
        a.impulse_spending = unnecessary;
        a.unnecessary_spending = unnecessary;
        a
    }

    #[test]
    fn test_healthy_week_gate() {
        let a = analysis(100.0, 50.0);
        let below = Streaks { no_junk_food: 6, no_impulse_spending: 0 };
        let at = Streaks { no_junk_food: 7, no_impulse_spending: 0 };
        assert!(!unlocked_badges(&below, &a).contains(&Badge::HealthyWeek));
        assert!(unlocked_badges(&at, &a).contains(&Badge::HealthyWeek));
    }

    #[test]
    fn test_mindful_month_gate() {
        let a = analysis(100.0, 50.0);
        let s = Streaks { no_junk_food: 0, no_impulse_spending: 30 };
        assert!(unlocked_badges(&s, &a).contains(&Badge::MindfulMonth));
    }

    #[test]
    fn test_super_saver_needs_spending() {
        let s = Streaks::default();
        // No spending at all: ratio undefined, badge stays locked.
        assert!(!unlocked_badges(&s, &analysis(0.0, 0.0)).contains(&Badge::SuperSaver));
        assert!(unlocked_badges(&s, &analysis(1000.0, 50.0)).contains(&Badge::SuperSaver));
        assert!(!unlocked_badges(&s, &analysis(1000.0, 100.0)).contains(&Badge::SuperSaver));
    }

    #[test]
    fn test_challenge_completion() {
        let s = Streaks { no_junk_food: 8, no_impulse_spending: 3 };
        let p = GoalProgress { junk_pct: 0.0, impulse_pct: 0.0, savings_pct: 100.0 };
        let list = challenges(&s, &p);
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|c| c.completed));
    }
}
