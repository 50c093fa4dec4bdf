//! Error types for Packwise

use thiserror::Error;

use crate::pack::PackId;

/// Main error type for Packwise operations.
///
/// Every error is terminal for the call that produced it: a failed
/// allocation or catalog mutation leaves all state untouched, and
/// nothing inside the engine retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackwiseError {
    /// Requested item count was zero or negative.
    #[error("invalid request: items count must be positive, got {0}")]
    InvalidRequest(i64),

    /// A pack size was zero or negative.
    #[error("invalid pack size: must be positive, got {0}")]
    InvalidSize(i64),

    /// No pack with the given id exists in the catalog.
    #[error("pack size {0} not found")]
    NotFound(PackId),

    /// Allocation was attempted against an empty catalog.
    #[error("no pack sizes available")]
    NoPacksAvailable,

    /// The catalog already holds this size value and uniqueness is enforced.
    #[error("pack size {0} already exists in the catalog")]
    DuplicateSize(u64),

    /// The operation would exceed a configured resource bound.
    #[error("resource limit exceeded: required {required}, limit {limit}")]
    LimitExceeded { required: u64, limit: u64 },

    /// Internal error (should not occur in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for Packwise operations.
pub type Result<T> = std::result::Result<T, PackwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PackwiseError::InvalidRequest(-3).to_string(),
            "invalid request: items count must be positive, got -3"
        );
        assert_eq!(
            PackwiseError::NotFound(PackId::new(7)).to_string(),
            "pack size 7 not found"
        );
        assert_eq!(
            PackwiseError::NoPacksAvailable.to_string(),
            "no pack sizes available"
        );
        assert_eq!(
            PackwiseError::LimitExceeded {
                required: 100,
                limit: 10
            }
            .to_string(),
            "resource limit exceeded: required 100, limit 10"
        );
    }
}
