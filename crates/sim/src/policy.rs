//! The reorder policy: restock everything at or below its threshold.
//!
//! Runs after a sale commits, as its own transactional unit, so a failure
//! here never undoes the order. Idempotent per scan: with no qualifying
//! rows it is a no-op.

use chrono::{DateTime, Utc};
use tracing::info;

use brewsim_core::dollars;
use brewsim_inventory::RestockPlan;
use brewsim_store::ShopStore;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::log::ReorderLog;

/// Scan all stock rows; restock each one at or below its reorder threshold
/// to the configured target, debit the cost from today's balance, and
/// append the events to the reorder log. Returns the applied plans.
pub async fn run_reorder_scan(
    store: &ShopStore,
    config: &SimConfig,
    now: DateTime<Utc>,
) -> Result<Vec<RestockPlan>, SimError> {
    let stock = store.list_stock().await?;

    let mut plans = Vec::new();
    for row in stock.iter().filter(|row| row.needs_reorder()) {
        // Stock names are often plural where menu names are singular; fall
        // back to a flat default cost when nothing on the menu matches.
        let unit_cost = store
            .menu_cost_for(row.menu_lookup_name())
            .await?
            .unwrap_or(config.default_unit_cost_cents);
        if let Some(plan) = row.plan_restock(config.restock_target, unit_cost) {
            plans.push(plan);
        }
    }
    if plans.is_empty() {
        return Ok(plans);
    }

    let business_date = config.hours().business_date(now);
    store.apply_restocks(&plans, business_date).await?;

    let log = ReorderLog::new(&config.reorder_log_path);
    log.append(now.with_timezone(&config.offset()), &plans)?;

    for plan in &plans {
        info!(
            item = %plan.item_name,
            amount = plan.amount,
            cost = %dollars(plan.total_cost_cents),
            "restocked inventory"
        );
    }
    Ok(plans)
}
