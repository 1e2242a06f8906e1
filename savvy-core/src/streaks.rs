//! Streak engine: consecutive-day abstinence counters.
//!
//! A streak is the number of whole days since the most recent occurrence
//! of the tracked behavior (junk-food purchase, impulse purchase). When a
//! behavior has never occurred, the streak falls back to days since the
//! earliest transaction on record ("clean since records began").

use crate::profile::Streaks;
use crate::transaction::Transaction;
use chrono::NaiveDate;

/// Compute both streaks as of `today`. Returns `None` on an empty log so
/// the caller can keep its previously cached values.
pub fn compute_streaks(transactions: &[Transaction], today: NaiveDate) -> Option<Streaks> {
    if transactions.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut last_junk: Option<NaiveDate> = None;
    let mut last_impulse: Option<NaiveDate> = None;
    for t in &sorted {
        if t.is_junk_food() {
            last_junk = Some(t.date);
        }
        if t.is_impulse {
            last_impulse = Some(t.date);
        }
    }

    let earliest = sorted[0].date;
    let since = |d: NaiveDate| (today - d).num_days().max(0);

    Some(Streaks {
        no_junk_food: since(last_junk.unwrap_or(earliest)),
        no_impulse_spending: since(last_impulse.unwrap_or(earliest)),
    })
}
