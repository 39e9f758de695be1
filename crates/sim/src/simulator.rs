//! The transaction simulator: synthesize one plausible sale and apply its
//! downstream effects atomically.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use brewsim_core::{Cents, OrderId, dollars};
use brewsim_inventory::RestockPlan;
use brewsim_sales::{OrderDraft, PaymentMethod};
use brewsim_store::{SaleRecord, ShopStore};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::hours::BusinessHours;
use crate::policy;

/// What one successful attempt produced.
#[derive(Debug, Clone)]
pub struct SaleOutcome {
    pub order_id: OrderId,
    pub total_cents: Cents,
    pub line_count: usize,
    pub restocks: Vec<RestockPlan>,
}

/// The simulator: a store handle plus configuration. All randomness comes
/// through the caller's `Rng`, so tests can supply seeded sequences.
#[derive(Debug, Clone)]
pub struct Simulator {
    store: ShopStore,
    config: SimConfig,
}

impl Simulator {
    pub fn new(store: ShopStore, config: SimConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn hours(&self) -> BusinessHours {
        self.config.hours()
    }

    /// Attempt one simulated transaction now.
    ///
    /// Returns `Ok(None)` when the shop is closed. When open, composes a
    /// sale, commits it in one transaction, then runs the reorder scan as a
    /// second independent unit.
    pub async fn attempt(
        &self,
        rng: &mut (impl Rng + ?Sized),
        now: DateTime<Utc>,
    ) -> Result<Option<SaleOutcome>, SimError> {
        if !self.hours().is_open(now) {
            debug!("shop is closed; skipping attempt");
            return Ok(None);
        }

        let sale = self.compose_sale(rng, now).await?;
        let total_cents = sale.draft.total_cents();
        let line_count = sale.draft.lines().len();

        let order_id = self.store.record_sale(&sale).await?;
        info!(
            order_id = order_id.value(),
            total = %dollars(total_cents),
            lines = line_count,
            payment = sale.draft.payment_method.as_str(),
            walk_in = sale.draft.customer_id.is_none(),
            "recorded simulated order"
        );

        let restocks = policy::run_reorder_scan(&self.store, &self.config, now).await?;

        Ok(Some(SaleOutcome {
            order_id,
            total_cents,
            line_count,
            restocks,
        }))
    }

    /// Compose a sale from the current roster without touching the store's
    /// write side.
    async fn compose_sale(
        &self,
        rng: &mut (impl Rng + ?Sized),
        now: DateTime<Utc>,
    ) -> Result<SaleRecord, SimError> {
        let menu = self.store.active_menu_items().await?;
        if menu.is_empty() {
            return Err(SimError::NoActiveMenuItems);
        }
        let customers = self.store.list_customers().await?;
        let employees = self.store.list_employees().await?;
        let stock = self.store.list_stock().await?;

        let customer_id = if !customers.is_empty() && !rng.gen_bool(self.config.walk_in_chance) {
            customers.choose(rng).map(|c| c.id)
        } else {
            None
        };
        let employee_id = employees.choose(rng).map(|e| e.id);
        let payment = PaymentMethod::ALL
            .choose(rng)
            .copied()
            .unwrap_or(PaymentMethod::Cash);

        let mut sale = SaleRecord {
            draft: OrderDraft::new(customer_id, employee_id, now, payment),
            stock_deductions: Vec::new(),
            business_date: self.hours().business_date(now),
        };

        let item_count = rng.gen_range(1..=3usize).min(menu.len());
        for item in menu.choose_multiple(rng, item_count) {
            let quantity = rng.gen_range(1..=3i64);
            sale.draft.add_line(item.id, quantity, item.price_cents)?;

            // First stock row whose name contains the item's name wins;
            // unmatched items simply have no inventory effect.
            if let Some(row) = stock.iter().find(|row| row.matches_menu_item(&item.name)) {
                sale.add_deduction(row.id, quantity as f64);
            }
        }
        Ok(sale)
    }
}
