//! Day-granularity date helpers.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_y, next_m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // First of next month minus first of this month.
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    let next_first = NaiveDate::from_ymd_opt(next_y, next_m, 1).unwrap();
    (next_first - first).num_days() as u32
}

/// True when both dates fall in the same calendar month and year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Today's calendar date in an IANA timezone like "Asia/Kolkata".
pub fn today_in_tz(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()), 28);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 31);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 4, 5).unwrap()), 30);
    }

    #[test]
    fn test_same_month() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let c = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        assert!(same_month(a, b));
        assert!(!same_month(a, c));
    }

    #[test]
    fn test_today_in_tz_rejects_garbage() {
        assert!(today_in_tz("Not/AZone").is_err());
        assert!(today_in_tz("Asia/Kolkata").is_ok());
    }
}
