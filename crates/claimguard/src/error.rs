//! Error types for the engine.

use claimguard_core::CoreError;
use claimguard_perms::PermsError;
use claimguard_store::StoreError;
use thiserror::Error;

/// Errors that can occur while evaluating an event or loading configuration.
///
/// Rule evaluation never hands these to the host: a failed evaluation is
/// settled into a restrictive decision by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Claim store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Permission collaborator error.
    #[error("permission error: {0}")]
    Permission(#[from] PermsError),

    /// Domain value error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A claim corner would fall outside the coordinate range.
    #[error("coordinate out of range: {0}")]
    OutOfRange(String),

    /// Configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
