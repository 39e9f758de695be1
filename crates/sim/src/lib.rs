//! `brewsim-sim` — the transaction simulator and its scheduling.
//!
//! One operation does the work: [`Simulator::attempt`] gates on business
//! hours, composes a plausible sale from an injected random source, commits
//! it through the store, and runs the reorder policy. The two cadence
//! drivers in [`scheduler`] (probabilistic tick, standalone loop) differ
//! only in when they call it.

pub mod config;
pub mod error;
pub mod hours;
pub mod log;
pub mod policy;
pub mod scheduler;
pub mod simulator;

pub use config::SimConfig;
pub use error::SimError;
pub use hours::BusinessHours;
pub use log::ReorderLog;
pub use simulator::{SaleOutcome, Simulator};
