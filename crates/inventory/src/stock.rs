use serde::{Deserialize, Serialize};

use brewsim_core::{Cents, StockItemId};

/// One inventory row: a tracked ingredient or good.
///
/// `item_name` is free text and is matched *fuzzily* against menu item names
/// (case-insensitive substring), so "Espresso Beans" covers the "Espresso"
/// menu item and "Croissants" covers "Croissant". Quantities are in the
/// row's own `unit` (kg, L, pcs) and are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub item_name: String,
    pub quantity_on_hand: f64,
    pub reorder_level: f64,
    pub unit: String,
}

/// A planned restock for one stock row, priced and ready to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockPlan {
    pub stock_id: StockItemId,
    pub item_name: String,
    /// Quantity added (target minus current level), always positive.
    pub amount: f64,
    pub unit_cost_cents: Cents,
    pub total_cost_cents: Cents,
}

impl StockItem {
    /// Deduct a sold quantity, flooring at zero.
    pub fn deduct(&mut self, quantity: f64) {
        self.quantity_on_hand = (self.quantity_on_hand - quantity).max(0.0);
    }

    /// True when the row is at or below its reorder threshold.
    pub fn needs_reorder(&self) -> bool {
        self.quantity_on_hand <= self.reorder_level
    }

    /// Case-insensitive substring match against a menu item name.
    pub fn matches_menu_item(&self, menu_name: &str) -> bool {
        self.item_name
            .to_lowercase()
            .contains(&menu_name.to_lowercase())
    }

    /// Name used to look up a restock unit cost on the menu: stock names are
    /// often plural ("Croissants") where menu names are singular.
    pub fn menu_lookup_name(&self) -> &str {
        self.item_name
            .strip_suffix('s')
            .unwrap_or(&self.item_name)
    }

    /// Plan a restock up to `target`, or `None` when the row already holds
    /// at least that much. `total_cost_cents` rounds to the nearest cent.
    pub fn plan_restock(&self, target: f64, unit_cost_cents: Cents) -> Option<RestockPlan> {
        let amount = target - self.quantity_on_hand;
        if amount <= 0.0 {
            return None;
        }
        Some(RestockPlan {
            stock_id: self.id,
            item_name: self.item_name.clone(),
            amount,
            unit_cost_cents,
            total_cost_cents: (amount * unit_cost_cents as f64).round() as Cents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn milk(quantity: f64) -> StockItem {
        StockItem {
            id: StockItemId::new(1),
            item_name: "Milk".to_string(),
            quantity_on_hand: quantity,
            reorder_level: 10.0,
            unit: "L".to_string(),
        }
    }

    #[test]
    fn deduct_floors_at_zero() {
        let mut row = milk(2.0);
        row.deduct(5.0);
        assert_eq!(row.quantity_on_hand, 0.0);
    }

    #[test]
    fn reorder_triggers_at_threshold_inclusive() {
        assert!(milk(10.0).needs_reorder());
        assert!(milk(8.0).needs_reorder());
        assert!(!milk(10.5).needs_reorder());
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let beans = StockItem {
            id: StockItemId::new(2),
            item_name: "Espresso Beans".to_string(),
            quantity_on_hand: 20.0,
            reorder_level: 5.0,
            unit: "kg".to_string(),
        };
        assert!(beans.matches_menu_item("espresso"));
        assert!(beans.matches_menu_item("Espresso"));
        assert!(!beans.matches_menu_item("Latte"));
    }

    #[test]
    fn lookup_name_trims_one_trailing_s() {
        let croissants = StockItem {
            id: StockItemId::new(3),
            item_name: "Croissants".to_string(),
            quantity_on_hand: 15.0,
            reorder_level: 5.0,
            unit: "pcs".to_string(),
        };
        assert_eq!(croissants.menu_lookup_name(), "Croissant");
        assert_eq!(milk(8.0).menu_lookup_name(), "Milk");
    }

    #[test]
    fn restock_plan_prices_the_shortfall() {
        let plan = milk(8.0).plan_restock(20.0, 70).unwrap();
        assert_eq!(plan.amount, 12.0);
        assert_eq!(plan.total_cost_cents, 840);
    }

    #[test]
    fn no_plan_when_already_at_or_above_target() {
        assert!(milk(20.0).plan_restock(20.0, 70).is_none());
        assert!(milk(25.0).plan_restock(20.0, 70).is_none());
    }

    proptest! {
        /// Property: quantity on hand never goes negative, whatever is sold.
        #[test]
        fn deduction_never_goes_negative(start in 0.0f64..100.0, sold in 0.0f64..200.0) {
            let mut row = milk(start);
            row.deduct(sold);
            prop_assert!(row.quantity_on_hand >= 0.0);
        }

        /// Property: a produced restock plan always lands exactly on target.
        #[test]
        fn restock_plan_reaches_target(start in 0.0f64..40.0, cost in 1i64..1_000) {
            if let Some(plan) = milk(start).plan_restock(20.0, cost) {
                prop_assert!(plan.amount > 0.0);
                prop_assert!((start + plan.amount - 20.0).abs() < 1e-9);
            } else {
                prop_assert!(start >= 20.0);
            }
        }
    }
}
