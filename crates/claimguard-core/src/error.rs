//! Error types for claimguard core.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("item stack amount must be positive, got {0}")]
    EmptyStack(u32),

    #[error("item stack amount {amount} exceeds maximum of {max}")]
    OversizedStack { amount: u32, max: u32 },

    #[error("inventory slot {slot} out of range (size {size})")]
    SlotOutOfRange { slot: usize, size: usize },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
