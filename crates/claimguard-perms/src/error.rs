//! Error types for the permissions module.

use claimguard_store::StoreError;
use thiserror::Error;

/// Errors that prevent the permission collaborator from answering.
///
/// A refusal is not an error; see [`crate::Denial`].
#[derive(Debug, Error)]
pub enum PermsError {
    /// Claim lookup failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Trust table could not be consulted.
    #[error("trust table unavailable: {0}")]
    Unavailable(String),
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
