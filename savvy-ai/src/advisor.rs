//! Coaching, meal ideas, reports, and the wellness alert.
//!
//! Each helper owns its degradation policy: short-circuit to canned copy
//! when there is nothing to analyze, fall back to fixed copy when the
//! provider is missing or errors. Errors never propagate to callers.

use crate::client::{generate_text, AiConfig};
use crate::prompts::{
    coach_prompt, health_alert_prompt, meal_ideas_prompt, report_prompt, ALERT_FALLBACK,
    COACH_EMPTY, COACH_FALLBACK, MEAL_IDEAS_EMPTY, MEAL_IDEAS_FALLBACK, REPORT_FALLBACK,
};
use chrono::NaiveDate;
use savvy_core::{junk_food_count_last_week, junk_food_names, Analysis, Transaction, JUNK_ALERT_THRESHOLD};

async fn generate_or(config: Option<&AiConfig>, prompt: &str, fallback: &str) -> String {
    match config {
        Some(cfg) => match generate_text(cfg, prompt).await {
            Ok(s) if !s.trim().is_empty() => s,
            _ => fallback.to_string(),
        },
        None => fallback.to_string(),
    }
}

/// Three savings tips from the most recent transactions.
pub async fn coach_advice(config: Option<&AiConfig>, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return COACH_EMPTY.to_string();
    }
    generate_or(config, &coach_prompt(transactions), COACH_FALLBACK).await
}

/// Healthier alternatives to this month's junk-food purchases.
pub async fn meal_ideas(
    config: Option<&AiConfig>,
    transactions: &[Transaction],
    now: NaiveDate,
) -> String {
    let junk = junk_food_names(transactions, now, 5);
    if junk.is_empty() {
        return MEAL_IDEAS_EMPTY.to_string();
    }
    generate_or(config, &meal_ideas_prompt(&junk), MEAL_IDEAS_FALLBACK).await
}

/// Friendly monthly performance review from the derived analysis.
pub async fn monthly_report(config: Option<&AiConfig>, analysis: &Analysis) -> String {
    generate_or(config, &report_prompt(analysis), REPORT_FALLBACK).await
}

/// Gentle wellness alert, generated only when junk-food purchases in the
/// trailing week exceed the threshold. `None` means no alert is due.
pub async fn health_alert(
    config: Option<&AiConfig>,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Option<String> {
    let count = junk_food_count_last_week(transactions, today);
    if count <= JUNK_ALERT_THRESHOLD {
        return None;
    }
    Some(generate_or(config, &health_alert_prompt(count), ALERT_FALLBACK).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use savvy_core::{Category, Classification, FoodTag};

    fn junk_txn(date: &str) -> Transaction {
        Transaction::new(
            "u",
            "Dominos",
            200.0,
            date.parse().unwrap(),
            Classification {
                category: Category::Food,
                food_tag: Some(FoodTag::Junk),
                estimated_calories: 600.0,
                is_impulse: false,
                suggestion: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_coach_empty_log_short_circuits() {
        assert_eq!(coach_advice(None, &[]).await, COACH_EMPTY);
    }

    #[tokio::test]
    async fn test_coach_without_provider_uses_fallback() {
        let txns = vec![junk_txn("2024-03-01")];
        assert_eq!(coach_advice(None, &txns).await, COACH_FALLBACK);
    }

    #[tokio::test]
    async fn test_meal_ideas_without_junk_short_circuits() {
        assert_eq!(meal_ideas(None, &[], "2024-03-10".parse().unwrap()).await, MEAL_IDEAS_EMPTY);
    }

    #[tokio::test]
    async fn test_alert_only_fires_above_threshold() {
        let today: NaiveDate = "2024-03-10".parse().unwrap();
        let two = vec![junk_txn("2024-03-08"), junk_txn("2024-03-09")];
        assert_eq!(health_alert(None, &two, today).await, None);

        let three = vec![junk_txn("2024-03-07"), junk_txn("2024-03-08"), junk_txn("2024-03-09")];
        assert_eq!(health_alert(None, &three, today).await, Some(ALERT_FALLBACK.to_string()));
    }
}
