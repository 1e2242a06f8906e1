//! JSON-file document store, one transaction log and one profile
//! document per owner.
//!
//! The log is append-only: there is no edit or delete. The profile
//! document carries the user's limits plus a cached copy of the last
//! streak computation; the cache is advisory and callers always
//! recompute streaks from the log.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use savvy_core::{ProfilePatch, Streaks, Transaction, UserProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Per-user profile document as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredProfile {
    pub profile: UserProfile,
    /// Last computed streaks. Write-only telemetry: never a source of
    /// truth for rendering.
    pub streaks: Streaks,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// File-backed multi-tenant store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    root: PathBuf,
}

impl TransactionStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn transactions_path(&self, owner: &str) -> PathBuf {
        self.root.join(format!("transactions-{owner}.json"))
    }

    fn profile_path(&self, owner: &str) -> PathBuf {
        self.root.join(format!("profile-{owner}.json"))
    }

    fn load_log(&self, owner: &str) -> Result<Vec<Transaction>> {
        let p = self.transactions_path(owner);
        if !p.exists() {
            return Ok(Vec::new());
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        Ok(serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?)
    }

    fn write_log(&self, owner: &str, log: &[Transaction]) -> Result<()> {
        let p = self.transactions_path(owner);
        let json = serde_json::to_string_pretty(log)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    /// Append a new transaction, assigning its id. Returns the stored
    /// record.
    pub fn append(&self, mut txn: Transaction) -> Result<Transaction> {
        if txn.name.trim().is_empty() {
            bail!("transaction name must not be empty");
        }
        if !(txn.amount.is_finite() && txn.amount > 0.0) {
            bail!("transaction amount must be positive, got {}", txn.amount);
        }
        let mut log = self.load_log(&txn.owner_id)?;
        txn.id = format!("txn-{:04}", log.len() + 1);
        log.push(txn.clone());
        self.write_log(&txn.owner_id, &log)?;
        Ok(txn)
    }

    /// Materialized view of the owner's log, newest date first (matching
    /// the dashboard's recent-transactions ordering).
    pub fn list(&self, owner: &str) -> Result<Vec<Transaction>> {
        let mut log = self.load_log(owner)?;
        log.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(log)
    }

    /// Read the profile document, creating it with `defaults` on first
    /// access.
    pub fn get_or_create_profile(&self, owner: &str, defaults: UserProfile) -> Result<StoredProfile> {
        let p = self.profile_path(owner);
        if p.exists() {
            let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
            return Ok(serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?);
        }
        let doc = StoredProfile {
            profile: defaults,
            streaks: Streaks::default(),
            created_at: Utc::now(),
        };
        self.write_profile(owner, &doc)?;
        Ok(doc)
    }

    fn write_profile(&self, owner: &str, doc: &StoredProfile) -> Result<()> {
        let p = self.profile_path(owner);
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    /// Merge a partial settings edit into the profile document.
    pub fn update_profile(&self, owner: &str, patch: &ProfilePatch) -> Result<StoredProfile> {
        let mut doc = self.get_or_create_profile(owner, UserProfile::default())?;
        doc.profile.apply(patch);
        self.write_profile(owner, &doc)?;
        Ok(doc)
    }

    /// Persist the latest streak computation into the profile document.
    /// Advisory only; readers recompute from the log.
    pub fn save_streaks(&self, owner: &str, streaks: Streaks) -> Result<()> {
        let mut doc = self.get_or_create_profile(owner, UserProfile::default())?;
        doc.streaks = streaks;
        self.write_profile(owner, &doc)
    }
}
