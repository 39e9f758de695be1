//! `brewsim-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, EmployeeId, MenuItemId, OrderId, StockItemId};
pub use money::{Cents, dollars, from_dollars};
