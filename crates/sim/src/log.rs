//! The append-only reorder event log.
//!
//! Plain text, one self-describing line per event; consumers read the last
//! N lines for display. Not meant for strict parsing.

use chrono::{DateTime, FixedOffset};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use brewsim_core::dollars;
use brewsim_inventory::RestockPlan;

/// Handle to the reorder log file.
#[derive(Debug, Clone)]
pub struct ReorderLog {
    path: PathBuf,
}

impl ReorderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line per restock, e.g.
    /// `2026-08-12 14:03:22 - Reordered 12 Milk at $0.70/unit. Total cost: $8.40`
    pub fn append(&self, at: DateTime<FixedOffset>, plans: &[RestockPlan]) -> io::Result<()> {
        if plans.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for plan in plans {
            writeln!(
                file,
                "{} - Reordered {} {} at ${}/unit. Total cost: ${}",
                at.format("%Y-%m-%d %H:%M:%S"),
                fmt_quantity(plan.amount),
                plan.item_name,
                dollars(plan.unit_cost_cents),
                dollars(plan.total_cost_cents),
            )?;
        }
        Ok(())
    }

    /// Last `n` lines, oldest first. A missing file reads as empty.
    pub fn tail(&self, n: usize) -> io::Result<Vec<String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].iter().map(|s| s.to_string()).collect())
    }
}

/// Whole quantities render without a decimal point ("12", not "12.0").
fn fmt_quantity(q: f64) -> String {
    if q.fract() == 0.0 {
        format!("{}", q as i64)
    } else {
        format!("{q:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewsim_core::StockItemId;
    use chrono::TimeZone;

    fn plan() -> RestockPlan {
        RestockPlan {
            stock_id: StockItemId::new(1),
            item_name: "Milk".to_string(),
            amount: 12.0,
            unit_cost_cents: 70,
            total_cost_cents: 840,
        }
    }

    fn noon() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 12, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn appends_human_readable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = ReorderLog::new(dir.path().join("reorder_log.txt"));

        log.append(noon(), &[plan()]).unwrap();
        let lines = log.tail(10).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "2026-08-12 12:00:00 - Reordered 12 Milk at $0.70/unit. Total cost: $8.40"
        );
    }

    #[test]
    fn tail_returns_last_n_lines_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = ReorderLog::new(dir.path().join("reorder_log.txt"));
        for _ in 0..5 {
            log.append(noon(), &[plan()]).unwrap();
        }
        assert_eq!(log.tail(3).unwrap().len(), 3);
        assert_eq!(log.tail(100).unwrap().len(), 5);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ReorderLog::new(dir.path().join("nope.txt"));
        assert!(log.tail(10).unwrap().is_empty());
    }

    #[test]
    fn fractional_quantities_keep_one_decimal() {
        assert_eq!(fmt_quantity(12.0), "12");
        assert_eq!(fmt_quantity(12.5), "12.5");
    }
}
