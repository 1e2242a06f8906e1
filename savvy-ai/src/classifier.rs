//! Expense classification via the generative endpoint.
//!
//! The model is prompted for bare JSON but routinely wraps it in
//! markdown fences anyway; strip those before parsing. Any failure on
//! this path (network, non-200, unparsable body) degrades to the fixed
//! fallback classification so the write path is never blocked.

use crate::client::{generate_text, AiConfig};
use crate::prompts::classification_prompt;
use anyhow::{Context, Result};
use regex::Regex;
use savvy_core::Classification;

/// Remove ```json fences and surrounding noise from model output.
pub fn clean_model_json(raw: &str) -> String {
    let fences = Regex::new(r"```(?:json)?").unwrap();
    fences.replace_all(raw, "").trim().to_string()
}

/// Parse a classification payload, tolerating fenced output and stray
/// model inconsistencies (food tag on non-food, negative calories).
pub fn parse_classification(raw: &str) -> Result<Classification> {
    let cleaned = clean_model_json(raw);
    let parsed: Classification =
        serde_json::from_str(&cleaned).context("parse classification JSON")?;
    Ok(parsed.normalized())
}

/// Classify one expense, propagating errors for callers that want them.
pub async fn try_classify(config: &AiConfig, name: &str, amount: f64) -> Result<Classification> {
    let prompt = classification_prompt(name, amount);
    let raw = generate_text(config, &prompt).await?;
    parse_classification(&raw)
}

/// Classify one expense with the full degradation policy: no configured
/// provider or any failure yields `Classification::fallback()`.
pub async fn classify(config: Option<&AiConfig>, name: &str, amount: f64) -> Classification {
    match config {
        Some(cfg) => try_classify(cfg, name, amount)
            .await
            .unwrap_or_else(|_| Classification::fallback()),
        None => Classification::fallback(),
    }
}
