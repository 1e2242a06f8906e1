use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAI,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
}

impl AiConfig {
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            provider: Provider::Gemini,
            model: "gemini-2.5-flash".to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            provider: Provider::OpenAI,
            model: "gpt-4o-mini".to_string(),
            api_key: api_key.into(),
        }
    }
}

/// One-shot text generation. Single attempt, no retry; callers handle
/// failure by substituting fallback copy.
pub async fn generate_text(config: &AiConfig, prompt: &str) -> Result<String> {
    match config.provider {
        Provider::Gemini => gemini_generate(&config.model, &config.api_key, prompt).await,
        Provider::OpenAI => openai_generate(&config.model, &config.api_key, prompt).await,
    }
}

async fn gemini_generate(model: &str, key: &str, prompt: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Part {
        text: String,
    }

    #[derive(Serialize)]
    struct Content {
        parts: Vec<Part>,
    }

    #[derive(Serialize)]
    struct Req {
        contents: Vec<Content>,
    }

    #[derive(Deserialize)]
    struct Resp {
        candidates: Vec<Candidate>,
    }

    #[derive(Deserialize)]
    struct Candidate {
        content: CandidateContent,
    }

    #[derive(Deserialize)]
    struct CandidateContent {
        parts: Vec<PartOut>,
    }

    #[derive(Deserialize)]
    struct PartOut {
        text: Option<String>,
    }

    let body = Req {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key={key}"
    );

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .headers(headers)
        .json(&body)
        .send()
        .await
        .context("gemini request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("gemini error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse gemini response")?;
    let text = out
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .and_then(|p| p.text.clone())
        .unwrap_or_default();

    Ok(text.trim().to_string())
}

async fn openai_generate(model: &str, key: &str, prompt: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Msg {
        role: String,
        content: String,
    }

    #[derive(Serialize)]
    struct Req {
        model: String,
        messages: Vec<Msg>,
        temperature: f32,
    }

    #[derive(Deserialize)]
    struct Resp {
        choices: Vec<Choice>,
    }

    #[derive(Deserialize)]
    struct Choice {
        message: MsgOut,
    }

    #[derive(Deserialize)]
    struct MsgOut {
        content: Option<String>,
    }

    let body = Req {
        model: model.to_string(),
        messages: vec![Msg {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: 0.4,
    };

    let client = reqwest::Client::new();
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .header(AUTHORIZATION, format!("Bearer {key}"))
        .json(&body)
        .send()
        .await
        .context("openai request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("openai error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse openai response")?;
    let content = out
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .unwrap_or_default();

    Ok(content.trim().to_string())
}
