//! Accounting domain module: the daily cash balance.

pub mod balance;

pub use balance::{DEFAULT_OPENING_CENTS, DailyBalance};
