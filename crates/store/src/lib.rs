//! `brewsim-store` — SQLite persistence for the shop.
//!
//! All access goes through an explicitly passed [`ShopStore`] handle (no
//! global connection state). The store exposes typed reads plus two
//! transactional write operations: [`ShopStore::record_sale`] commits an
//! order with its downstream effects all-or-nothing, and
//! [`ShopStore::apply_restocks`] applies one reorder scan as an independent
//! unit.

pub mod error;
pub mod reports;
pub mod sale;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use reports::{HourlyBucket, OrderSummary, Overview, Receipt, ReceiptLine};
pub use sale::{SaleRecord, StockDeduction};
pub use seed::seed_if_empty;
pub use store::ShopStore;
