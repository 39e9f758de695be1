use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use brewsim_core::Cents;

/// Baseline used when the very first balance row is created ($1000.00).
pub const DEFAULT_OPENING_CENTS: Cents = 100_000;

/// The running cash balance for one calendar date.
///
/// At most one row exists per date (schema-enforced). A new day's row is
/// seeded from the most recent prior row, so the balance carries forward;
/// order credits and reorder debits then net against it over the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBalance {
    pub id: i64,
    pub date: NaiveDate,
    pub balance_cents: Cents,
    pub note: Option<String>,
}

impl DailyBalance {
    /// Build the row for `date`, carrying the closing balance of the most
    /// recent prior row or falling back to the fixed opening baseline.
    pub fn roll_forward(prev: Option<&DailyBalance>, date: NaiveDate) -> Self {
        let (balance_cents, note) = match prev {
            Some(p) => (
                p.balance_cents,
                format!("carried forward from {}", p.date),
            ),
            None => (DEFAULT_OPENING_CENTS, "opening baseline".to_string()),
        };
        Self {
            id: 0,
            date,
            balance_cents,
            note: Some(note),
        }
    }

    /// Add an order's takings.
    pub fn credit(&mut self, amount: Cents) {
        self.balance_cents += amount;
    }

    /// Subtract a restock cost. Balances may legitimately go negative.
    pub fn debit(&mut self, amount: Cents) {
        self.balance_cents -= amount;
    }
}
