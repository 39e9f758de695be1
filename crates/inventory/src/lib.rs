//! Inventory domain module.
//!
//! Stock rules are pure domain logic (no IO, no storage): deductions floor
//! at zero, the reorder predicate is inclusive at the threshold, and restock
//! planning only tops up when the target is above the current level.

pub mod stock;

pub use stock::{RestockPlan, StockItem};
