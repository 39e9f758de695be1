//! The write-side record of one composed sale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use brewsim_core::StockItemId;
use brewsim_sales::OrderDraft;

/// Inventory effect of a sale on one stock row.
///
/// Quantities for lines that matched the same row are already accumulated;
/// the store floors the resulting level at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockDeduction {
    pub stock_id: StockItemId,
    pub quantity: f64,
}

/// Everything [`crate::ShopStore::record_sale`] commits in one transaction:
/// the order and its lines, the matched stock deductions, and the credit to
/// the balance row for `business_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub draft: OrderDraft,
    pub stock_deductions: Vec<StockDeduction>,
    /// Local calendar date the sale belongs to (shop timezone, not UTC).
    pub business_date: NaiveDate,
}

impl SaleRecord {
    /// Merge a deduction into the set, accumulating per stock row.
    pub fn add_deduction(&mut self, stock_id: StockItemId, quantity: f64) {
        if let Some(existing) = self
            .stock_deductions
            .iter_mut()
            .find(|d| d.stock_id == stock_id)
        {
            existing.quantity += quantity;
        } else {
            self.stock_deductions.push(StockDeduction { stock_id, quantity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewsim_sales::PaymentMethod;
    use chrono::Utc;

    #[test]
    fn deductions_accumulate_per_stock_row() {
        let mut sale = SaleRecord {
            draft: OrderDraft::new(None, None, Utc::now(), PaymentMethod::Cash),
            stock_deductions: Vec::new(),
            business_date: Utc::now().date_naive(),
        };
        sale.add_deduction(StockItemId::new(1), 2.0);
        sale.add_deduction(StockItemId::new(2), 1.0);
        sale.add_deduction(StockItemId::new(1), 3.0);
        assert_eq!(sale.stock_deductions.len(), 2);
        assert_eq!(sale.stock_deductions[0].quantity, 5.0);
    }
}
