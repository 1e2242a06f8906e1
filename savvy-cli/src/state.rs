use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn savvy_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".savvy"))
}

pub fn ensure_savvy_home() -> Result<PathBuf> {
    let dir = savvy_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Root directory of the document store (transaction logs + profiles).
pub fn store_root() -> Result<PathBuf> {
    Ok(ensure_savvy_home()?.join("store"))
}
