//! savvy-store: persistence collaborator for the Savvy ledger.
//!
//! An append-only JSON document store keyed by owner, a poll-based live
//! subscription, and CSV statement import.

pub mod csv_import;
pub mod store;
pub mod watch;

pub use csv_import::{parse_expense_csv, CsvExpense};
pub use store::{StoredProfile, TransactionStore};
pub use watch::{subscribe, Subscription};
