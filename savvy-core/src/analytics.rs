//! Analytics engine: derived monthly metrics over the transaction log.
//!
//! Pure functions of `(transactions, reference date)`. Safe to re-run on
//! every change notification; no I/O, no hidden state.

use crate::time::{days_in_month, same_month};
use crate::transaction::{Category, FoodTag, Transaction};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Derived metrics for the calendar month containing the reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub total_spent: f64,
    pub junk_food_spending: f64,
    pub impulse_spending: f64,
    /// Defined to be identical to `impulse_spending`; reported under a
    /// separate name on the dashboard.
    pub unnecessary_spending: f64,
    pub total_calories: f64,
    /// Per-category summed amounts, only for categories present this month.
    pub category_breakdown: Vec<(Category, f64)>,
    /// Summed amount per calendar day, index 0 = day 1. Always exactly
    /// days-in-month long, zero-filled for quiet days.
    pub daily_series: Vec<f64>,
}

impl Analysis {
    pub fn empty(now: NaiveDate) -> Self {
        Self {
            total_spent: 0.0,
            junk_food_spending: 0.0,
            impulse_spending: 0.0,
            unnecessary_spending: 0.0,
            total_calories: 0.0,
            category_breakdown: Vec::new(),
            daily_series: vec![0.0; days_in_month(now) as usize],
        }
    }
}

/// Compute the monthly analysis for `now`'s calendar month.
pub fn compute_analysis(transactions: &[Transaction], now: NaiveDate) -> Analysis {
    let mut out = Analysis::empty(now);
    let mut by_category: HashMap<Category, f64> = HashMap::new();

    for t in transactions.iter().filter(|t| same_month(t.date, now)) {
        let amount = t.sane_amount();
        out.total_spent += amount;
        if t.food_tag == Some(FoodTag::Junk) {
            out.junk_food_spending += amount;
        }
        if t.is_impulse {
            out.impulse_spending += amount;
        }
        if t.estimated_calories.is_finite() && t.estimated_calories > 0.0 {
            out.total_calories += t.estimated_calories;
        }
        *by_category.entry(t.category).or_default() += amount;

        let day = t.date.day() as usize;
        if day >= 1 && day <= out.daily_series.len() {
            out.daily_series[day - 1] += amount;
        }
    }

    // Stable display order for the breakdown.
    out.category_breakdown = Category::ALL
        .iter()
        .filter_map(|c| by_category.get(c).map(|v| (*c, *v)))
        .collect();

    out.unnecessary_spending = out.impulse_spending;
    out
}

/// Share of `part` in `total` as a percentage. A zero (or non-positive)
/// total yields 0, never NaN.
pub fn percent_of_total(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Names of junk-food purchases in `now`'s month, newest first, capped at
/// `limit`. Feeds the healthier-meal-ideas prompt.
pub fn junk_food_names(transactions: &[Transaction], now: NaiveDate, limit: usize) -> Vec<String> {
    let mut junk: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| same_month(t.date, now) && t.food_tag == Some(FoodTag::Junk))
        .collect();
    junk.sort_by(|a, b| b.date.cmp(&a.date));
    junk.into_iter().take(limit).map(|t| t.name.clone()).collect()
}

/// Count of junk-food purchases dated within the 7 days before `today`
/// (exclusive of older, inclusive of today). More than 2 triggers the
/// health alert.
pub fn junk_food_count_last_week(transactions: &[Transaction], today: NaiveDate) -> usize {
    transactions
        .iter()
        .filter(|t| {
            t.food_tag == Some(FoodTag::Junk) && {
                let age = (today - t.date).num_days();
                (0..7).contains(&age)
            }
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Classification;

    fn txn(date: &str, amount: f64, category: Category, food_tag: Option<FoodTag>, impulse: bool) -> Transaction {
        let mut t = Transaction::new(
            "user-1",
            "item",
            amount,
            date.parse().unwrap(),
            Classification {
                category,
                food_tag,
                estimated_calories: if food_tag.is_some() { 300.0 } else { 0.0 },
                is_impulse: impulse,
                suggestion: String::new(),
            },
        );
        t.id = format!("txn-{date}-{amount}");
        t
    }

    #[test]
    fn test_month_totals_split_junk_and_healthy() {
        let txns = vec![
            txn("2024-03-01", 500.0, Category::Food, Some(FoodTag::Junk), false),
            txn("2024-03-05", 200.0, Category::Food, Some(FoodTag::Healthy), false),
        ];
        let a = compute_analysis(&txns, "2024-03-10".parse().unwrap());
        assert_eq!(a.total_spent, 700.0);
        assert_eq!(a.junk_food_spending, 500.0);
        assert_eq!(a.impulse_spending, 0.0);
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let a = compute_analysis(&[], "2024-03-10".parse().unwrap());
        assert_eq!(a.total_spent, 0.0);
        assert_eq!(a.total_calories, 0.0);
        assert!(a.category_breakdown.is_empty());
        assert_eq!(a.daily_series.len(), 31);
        assert!(a.daily_series.iter().all(|v| *v == 0.0));
        assert_eq!(percent_of_total(a.impulse_spending, a.total_spent), 0.0);
    }

    #[test]
    fn test_filters_to_reference_month() {
        let txns = vec![
            txn("2024-03-01", 100.0, Category::Bills, None, false),
            txn("2024-02-28", 999.0, Category::Bills, None, false),
            txn("2023-03-15", 999.0, Category::Bills, None, false),
        ];
        let a = compute_analysis(&txns, "2024-03-10".parse().unwrap());
        assert_eq!(a.total_spent, 100.0);
    }

    #[test]
    fn test_category_partition_decomposition() {
        let txns = vec![
            txn("2024-03-01", 500.0, Category::Food, Some(FoodTag::Junk), true),
            txn("2024-03-02", 200.0, Category::Food, Some(FoodTag::Healthy), false),
            txn("2024-03-03", 300.0, Category::Shopping, None, true),
            txn("2024-03-04", 150.0, Category::Bills, None, false),
        ];
        let a = compute_analysis(&txns, "2024-03-10".parse().unwrap());

        let non_junk_food = 200.0;
        let non_food = 450.0;
        assert_eq!(a.total_spent, a.junk_food_spending + non_junk_food + non_food);

        let breakdown_sum: f64 = a.category_breakdown.iter().map(|(_, v)| v).sum();
        assert_eq!(breakdown_sum, a.total_spent);
    }

    #[test]
    fn test_unnecessary_is_exactly_impulse() {
        let txns = vec![
            txn("2024-03-03", 300.0, Category::Shopping, None, true),
            txn("2024-03-04", 150.0, Category::Bills, None, false),
            txn("2024-03-05", 75.5, Category::Entertainment, None, true),
        ];
        let a = compute_analysis(&txns, "2024-03-10".parse().unwrap());
        assert_eq!(a.unnecessary_spending, a.impulse_spending);
        assert_eq!(a.impulse_spending, 375.5);
    }

    #[test]
    fn test_daily_series_shape_and_sum() {
        let txns = vec![
            txn("2024-02-01", 10.0, Category::Bills, None, false),
            txn("2024-02-01", 15.0, Category::Food, None, false),
            txn("2024-02-29", 5.0, Category::Travel, None, false),
        ];
        let a = compute_analysis(&txns, "2024-02-14".parse().unwrap());
        assert_eq!(a.daily_series.len(), 29);
        assert_eq!(a.daily_series[0], 25.0);
        assert_eq!(a.daily_series[28], 5.0);
        let sum: f64 = a.daily_series.iter().sum();
        assert_eq!(sum, a.total_spent);
    }

    #[test]
    fn test_malformed_amounts_contribute_zero() {
        let mut bad = txn("2024-03-02", 50.0, Category::Other, None, false);
        bad.amount = f64::NAN;
        let txns = vec![
            bad,
            txn("2024-03-03", 40.0, Category::Other, None, false),
        ];
        let a = compute_analysis(&txns, "2024-03-10".parse().unwrap());
        assert_eq!(a.total_spent, 40.0);
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![
            txn("2024-03-01", 500.0, Category::Food, Some(FoodTag::Junk), true),
            txn("2024-03-05", 200.0, Category::Food, Some(FoodTag::Healthy), false),
        ];
        let now = "2024-03-10".parse().unwrap();
        assert_eq!(compute_analysis(&txns, now), compute_analysis(&txns, now));
    }

    #[test]
    fn test_junk_food_count_last_week() {
        let txns = vec![
            txn("2024-03-09", 100.0, Category::Food, Some(FoodTag::Junk), false),
            txn("2024-03-06", 100.0, Category::Food, Some(FoodTag::Junk), false),
            txn("2024-03-04", 100.0, Category::Food, Some(FoodTag::Junk), false),
            // too old
            txn("2024-03-01", 100.0, Category::Food, Some(FoodTag::Junk), false),
            // not junk
            txn("2024-03-08", 100.0, Category::Food, Some(FoodTag::Healthy), false),
        ];
        let today = "2024-03-10".parse().unwrap();
        assert_eq!(junk_food_count_last_week(&txns, today), 3);
    }

    #[test]
    fn test_junk_food_names_newest_first() {
        let mut older = txn("2024-03-01", 100.0, Category::Food, Some(FoodTag::Junk), false);
        older.name = "Burger King".to_string();
        let mut newer = txn("2024-03-07", 100.0, Category::Food, Some(FoodTag::Junk), false);
        newer.name = "Dominos".to_string();
        let names = junk_food_names(&[older, newer], "2024-03-10".parse().unwrap(), 5);
        assert_eq!(names, vec!["Dominos".to_string(), "Burger King".to_string()]);
    }
}
