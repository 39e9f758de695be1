//! Storage error model.

use thiserror::Error;

use brewsim_core::DomainError;

/// Error raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite/sqlx failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted value failed domain validation on the way out (or in).
    #[error("bad stored value: {0}")]
    Domain(#[from] DomainError),
}
