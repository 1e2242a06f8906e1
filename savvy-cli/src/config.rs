use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_savvy_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: UserSection,
    pub llm: LlmSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSection {
    /// Owner id for the document store. Single-user install, but the
    /// store itself is keyed per owner.
    pub owner: String,
    /// IANA timezone used to resolve "today" for streaks and filters.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSection {
    /// "gemini" or "openai"
    pub provider: String,
    /// Empty = provider default model
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserSection {
                owner: "default".to_string(),
                timezone: "Asia/Kolkata".to_string(),
            },
            llm: LlmSection {
                provider: "gemini".to_string(),
                model: String::new(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_savvy_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
