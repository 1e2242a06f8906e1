//! Prompt builders and the fixed fallback copy shown when generation
//! fails. Prompt text governs the entire classifier contract, so keep
//! wording changes deliberate.

use savvy_core::{Analysis, Transaction};

pub const COACH_EMPTY: &str = "Add your first transaction to get personalized savings tips!";
pub const COACH_FALLBACK: &str = "Could not generate advice right now. Please check back later.";
pub const MEAL_IDEAS_EMPTY: &str = "No junk food transactions found to analyze!";
pub const MEAL_IDEAS_FALLBACK: &str = "Could not generate meal ideas right now. Please try again later.";
pub const REPORT_FALLBACK: &str = "Could not generate your monthly report right now. Please try again later.";
pub const ALERT_FALLBACK: &str =
    "You've had several junk food purchases this week. Consider a healthier option for your next meal.";

/// Classification prompt: demands a bare JSON object matching the
/// `Classification` wire shape, with few-shot examples.
pub fn classification_prompt(name: &str, amount: f64) -> String {
    format!(
        r#"Analyze the following expense and return ONLY a valid JSON object. Do not include any other text or markdown formatting.
Expense: "{name}" for amount {amount}.

Based on the description, provide the following:
1.  "category": One of ["Food", "Travel", "Shopping", "Bills", "Entertainment", "Health", "Other"].
2.  "foodTag": If category is Food, one of ["Junk", "Healthy", "Neutral"]. Otherwise, null.
3.  "estimatedCalories": A rough calorie estimate if it's Junk or Healthy food. Otherwise, 0.
4.  "isImpulse": A boolean (true/false) suggesting if this is likely an impulse purchase (e.g., non-essential high-cost items like gadgets, luxury fashion, frequent small unnecessary purchases).
5.  "suggestion": A short, actionable tip related to this expense for saving money or being healthier.

Example for "McDonald's 250":
{{
    "category": "Food",
    "foodTag": "Junk",
    "estimatedCalories": 500,
    "isImpulse": true,
    "suggestion": "Consider a home-cooked meal next time to save money and calories."
}}

Example for "Nike Shoes 5000":
{{
    "category": "Shopping",
    "foodTag": null,
    "estimatedCalories": 0,
    "isImpulse": true,
    "suggestion": "Did you need these shoes right now? Setting a 'wants' budget can help manage impulse buys."
}}

Now, analyze this expense: "{name}" for {amount}"#
    )
}

/// Savings-coach prompt over the 10 most recent transactions.
pub fn coach_prompt(recent: &[Transaction]) -> String {
    let listing = recent
        .iter()
        .take(10)
        .map(|t| format!("{}: ₹{}", t.name, t.amount))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Based on these recent transactions [{listing}], act as a friendly financial coach. \
Provide 3 specific, actionable tips to help the user save money. Format the response as a \
single string with each tip on a new line, starting with a bullet point (e.g., \"• Tip 1...\\n• Tip 2...\")."
    )
}

pub fn meal_ideas_prompt(junk_names: &[String]) -> String {
    format!(
        "A user frequently eats the following junk foods: {}. Suggest 3 healthier and \
budget-friendly meal alternatives they could make or buy. For each suggestion, give a name \
and a one-sentence description. Format as a single string with each suggestion on a new \
line, starting with a bullet point.",
        junk_names.join(", ")
    )
}

/// Monthly report prompt from the derived analysis.
pub fn report_prompt(analysis: &Analysis) -> String {
    let top_category = analysis
        .category_breakdown
        .iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.label())
        .unwrap_or("N/A");
    format!(
        "Here is a user's spending summary for the month: {{\"totalSpent\": \"{:.2}\", \
\"unnecessarySpending\": \"{:.2}\", \"junkFoodSpending\": \"{:.2}\", \"impulseSpending\": \
\"{:.2}\", \"topCategory\": \"{top_category}\"}}. Act as a positive and motivational \
financial analyst. Write a short summary report (3-4 sentences) of their progress. \
Highlight one positive achievement and suggest one key area to focus on for next month. \
Format it as a friendly, encouraging paragraph.",
        analysis.total_spent,
        analysis.unnecessary_spending,
        analysis.junk_food_spending,
        analysis.impulse_spending,
    )
}

pub fn health_alert_prompt(junk_count: usize) -> String {
    format!(
        "A user has eaten junk food {junk_count} times in the last 7 days. Write a gentle, \
non-judgmental alert (2-3 sentences) encouraging them to consider healthier options for \
their next meal. Mention that moderation is key to a healthy lifestyle."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use savvy_core::Classification;

    #[test]
    fn test_classification_prompt_names_the_wire_fields() {
        let p = classification_prompt("McDonald's", 250.0);
        for field in ["\"category\"", "\"foodTag\"", "\"estimatedCalories\"", "\"isImpulse\"", "\"suggestion\""] {
            assert!(p.contains(field), "missing {field}");
        }
        assert!(p.contains("\"McDonald's\" for amount 250"));
    }

    #[test]
    fn test_coach_prompt_caps_at_ten() {
        let txns: Vec<_> = (0..15)
            .map(|i| {
                Transaction::new(
                    "u",
                    format!("item-{i}"),
                    10.0,
                    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    Classification::fallback(),
                )
            })
            .collect();
        let p = coach_prompt(&txns);
        assert!(p.contains("item-9"));
        assert!(!p.contains("item-10"));
    }

    #[test]
    fn test_report_prompt_picks_top_category() {
        let mut a = Analysis::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        a.category_breakdown = vec![
            (savvy_core::Category::Food, 100.0),
            (savvy_core::Category::Shopping, 900.0),
        ];
        assert!(report_prompt(&a).contains("\"topCategory\": \"Shopping\""));
    }

    #[test]
    fn test_report_prompt_empty_month() {
        let a = Analysis::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(report_prompt(&a).contains("\"topCategory\": \"N/A\""));
    }
}
