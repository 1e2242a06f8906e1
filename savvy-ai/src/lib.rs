//! savvy-ai: generative-AI collaborator for the Savvy ledger.
//!
//! Wraps the Gemini `generateContent` endpoint (OpenAI chat completions
//! as the alternate provider) behind two narrow surfaces: expense
//! classification and advice-text generation, both with fixed fallback
//! behavior on failure.

pub mod advisor;
pub mod classifier;
pub mod client;
pub mod prompts;

pub use advisor::{coach_advice, health_alert, meal_ideas, monthly_report};
pub use classifier::{classify, parse_classification, try_classify};
pub use client::{generate_text, AiConfig, Provider};
