//! Parse expense CSV exports for bulk import.
//!
//! Expected columns: Date (YYYY-MM-DD), Name, Amount. A header row and
//! unparseable rows are skipped rather than failing the import.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// One raw expense row parsed from CSV, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExpense {
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
}

pub fn parse_expense_csv(path: impl AsRef<Path>) -> Result<Vec<CsvExpense>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let date = match record
            .get(0)
            .map(str::trim)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        {
            Some(d) => d,
            None => continue, // header or malformed date
        };

        let name = record.get(1).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let amount: f64 = record
            .get(2)
            .unwrap_or("")
            .trim()
            .parse()
            .unwrap_or(0.0);
        if !(amount.is_finite() && amount > 0.0) {
            continue;
        }

        rows.push(CsvExpense { date, name, amount });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_csv(tag: &str, body: &str) -> PathBuf {
        let p = std::env::temp_dir().join(format!(
            "savvy-csv-test-{tag}-{}.csv",
            std::process::id()
        ));
        std::fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn test_parses_rows_and_skips_header() {
        let p = write_csv(
            "basic",
            "Date,Name,Amount\n2024-03-01,McDonald's,250\n2024-03-05,Groceries,480.50\n",
        );
        let rows = parse_expense_csv(&p).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "McDonald's");
        assert_eq!(rows[0].amount, 250.0);
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_skips_malformed_rows() {
        let p = write_csv(
            "bad",
            "Date,Name,Amount\nnot-a-date,Thing,10\n2024-03-02,,10\n2024-03-03,Free,0\n2024-03-04,Cab,-5\n2024-03-06,Lunch,120\n",
        );
        let rows = parse_expense_csv(&p).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Lunch");
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(parse_expense_csv("/nonexistent/expenses.csv").is_err());
    }
}
