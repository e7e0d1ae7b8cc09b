//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (missing
/// records, quantity invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested item was not found in the inventory.
    #[error("item not found")]
    NotFound,

    /// A removal asked for more units than the record holds.
    #[error("insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { available: i64, requested: i64 },
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_quantity(available: i64, requested: i64) -> Self {
        Self::InsufficientQuantity {
            available,
            requested,
        }
    }
}
