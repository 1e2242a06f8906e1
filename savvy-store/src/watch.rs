//! Live-query subscription over an owner's transaction log.
//!
//! The store is plain files, so "listen for changes" is a polling task:
//! fingerprint the log file, and when it changes deliver the freshly
//! materialized list to the callback. The callback also fires once at
//! subscribe time with the current list, matching snapshot-listener
//! semantics.

use crate::store::TransactionStore;
use savvy_core::Transaction;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle for an active subscription. Dropping it does NOT stop the
/// watcher; call `unsubscribe` on teardown/logout.
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        self.handle.abort();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    len: u64,
    mtime: Option<std::time::SystemTime>,
}

fn fingerprint(store: &TransactionStore, owner: &str) -> Option<Fingerprint> {
    let meta = std::fs::metadata(store.transactions_path(owner)).ok()?;
    Some(Fingerprint {
        len: meta.len(),
        mtime: meta.modified().ok(),
    })
}

/// Start watching `owner`'s log. `on_change` receives the materialized
/// list (newest first) once immediately and then after every detected
/// append. Read errors are skipped; the next poll retries.
pub fn subscribe<F>(
    store: TransactionStore,
    owner: impl Into<String>,
    interval: Duration,
    on_change: F,
) -> Subscription
where
    F: Fn(Vec<Transaction>) + Send + 'static,
{
    let owner = owner.into();
    let handle = tokio::spawn(async move {
        let mut seen = fingerprint(&store, &owner);
        if let Ok(list) = store.list(&owner) {
            on_change(list);
        }
        loop {
            tokio::time::sleep(interval).await;
            let now = fingerprint(&store, &owner);
            if now != seen {
                seen = now;
                if let Ok(list) = store.list(&owner) {
                    on_change(list);
                }
            }
        }
    });
    Subscription { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savvy_core::{Classification, Transaction};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn temp_store(tag: &str) -> TransactionStore {
        let root = std::env::temp_dir().join(format!(
            "savvy-watch-test-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        TransactionStore::open(root).unwrap()
    }

    fn txn(name: &str) -> Transaction {
        Transaction::new(
            "u1",
            name,
            10.0,
            "2024-03-01".parse().unwrap(),
            Classification::fallback(),
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_subscribe_fires_initially_and_on_append() {
        let store = temp_store("fires");
        store.append(txn("First")).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = fired.clone();
        let sub = subscribe(store.clone(), "u1", Duration::from_millis(10), move |list| {
            assert!(!list.is_empty());
            fired2.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        let initial = fired.load(Ordering::SeqCst);
        assert!(initial >= 1, "initial snapshot should fire");

        store.append(txn("Second")).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(
            fired.load(Ordering::SeqCst) > initial,
            "append should trigger a change notification"
        );

        sub.unsubscribe();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unsubscribe_stops_notifications() {
        let store = temp_store("stops");
        store.append(txn("First")).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = fired.clone();
        let sub = subscribe(store.clone(), "u1", Duration::from_millis(10), move |_| {
            fired2.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        sub.unsubscribe();
        tokio::time::sleep(Duration::from_millis(30)).await;

        let after_unsub = fired.load(Ordering::SeqCst);
        store.append(txn("Ignored")).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), after_unsub);
    }
}
