//! Error types for the store module.

use claimguard_core::ClaimId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing index could not be consulted.
    #[error("claim store unavailable: {0}")]
    Unavailable(String),

    /// Claim not found.
    #[error("claim not found: {0}")]
    ClaimNotFound(ClaimId),

    /// A subdivision was found below another subdivision.
    #[error("claim {0} is nested more than one level deep")]
    SubdivisionTooDeep(ClaimId),

    /// Requested bounds are unusable (e.g. subdivision outside its parent).
    #[error("invalid claim bounds: {0}")]
    InvalidBounds(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
