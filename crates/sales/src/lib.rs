//! Sales domain module: orders and their lines.
//!
//! An order's total is the sum of its lines by construction; the draft
//! builder is the only way to assemble one, so the invariant cannot be
//! violated by callers.

pub mod order;

pub use order::{Order, OrderDraft, OrderLine, PaymentMethod};
