//! The permission collaborator interface.

use std::fmt;

use claimguard_core::{ActorId, BlockPos, Claim, WorldId};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A policy refusal with a reason to show the actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    pub reason: String,
}

impl Denial {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Decides whether an actor may act inside claims.
///
/// Each method returns `Ok(None)` to allow, `Ok(Some(denial))` to refuse, and
/// `Err` only when no answer can be given.
pub trait Permissions: Send + Sync {
    /// May `actor` place a block at `pos`?
    fn allow_build(&self, actor: &ActorId, world: &WorldId, pos: BlockPos)
        -> Result<Option<Denial>>;

    /// May `actor` break the block at `pos`?
    fn allow_break(&self, actor: &ActorId, world: &WorldId, pos: BlockPos)
        -> Result<Option<Denial>>;

    /// May `actor` open containers in `claim`?
    fn allow_container_access(&self, claim: &Claim, actor: &ActorId) -> Result<Option<Denial>>;

    /// May `actor` build anywhere in `claim`?
    fn allow_claim_build(&self, claim: &Claim, actor: &ActorId) -> Result<Option<Denial>>;
}
