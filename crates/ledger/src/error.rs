//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is recoverable and local to a single operation; front ends
/// map the kind to a transport-specific message (HTTP status/body or console
/// text).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// An item with this identifier already exists; the existing record is
    /// left untouched.
    #[error("item id '{0}' already exists; use a unique id")]
    DuplicateId(String),

    /// A numeric field failed validation (non-finite, negative, or zero
    /// where a positive value is required).
    #[error("invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// No item with this identifier exists in the ledger.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// The item has no remaining uses; replacement is required.
    #[error("item '{name}' has reached its usage limit; replacement is required")]
    Exhausted { id: String, name: String },
}

impl LedgerError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn exhausted(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Exhausted {
            id: id.into(),
            name: name.into(),
        }
    }
}
