//! Simulation error model.

use thiserror::Error;

use brewsim_core::DomainError;
use brewsim_store::StoreError;

/// Error raised by one simulation attempt. Failures are terminal for the
/// attempt only, never for the process.
#[derive(Debug, Error)]
pub enum SimError {
    /// No active menu items exist; the attempt is abandoned with no state
    /// change.
    #[error("no active menu items to sell")]
    NoActiveMenuItems,

    /// The store rejected the attempt; the transaction rolled back.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A composed value violated a domain rule before anything was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The reorder log could not be written. The reorder transaction has
    /// already committed at this point; the error propagates unhandled.
    #[error("reorder log write failed: {0}")]
    Log(#[from] std::io::Error),
}
