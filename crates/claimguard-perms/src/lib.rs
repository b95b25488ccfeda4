//! # Claimguard Permissions
//!
//! The permission collaborator: who may build, break, or open containers
//! inside a claim they do not own.
//!
//! ## Overview
//!
//! The engine asks the [`Permissions`] trait and never decides trust itself.
//! A denial is an ordinary value ([`Denial`]) carrying a reason for the actor;
//! an `Err` means the collaborator could not answer at all.
//!
//! [`TrustTable`] is a reference implementation: claim owners and server
//! administrators may do anything, and owners grant [`TrustLevel`]s to other
//! actors per claim. Subdivisions fall back to their parent's grants.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use claimguard_core::{ActorId, BlockPos, WorldId};
//! use claimguard_perms::{Permissions, TrustLevel, TrustTable};
//! use claimguard_store::{ClaimStore, MemoryClaimStore, NewClaim};
//!
//! let store = Arc::new(MemoryClaimStore::new());
//! let world = WorldId::new("world");
//! let alice = ActorId::new("alice");
//! let bob = ActorId::new("bob");
//! let claim = store
//!     .create_claim(NewClaim::new(
//!         world.clone(),
//!         BlockPos::new(0, 60, 0),
//!         BlockPos::new(9, 64, 9),
//!         Some(alice.clone()),
//!     ))
//!     .unwrap()
//!     .claim()
//!     .clone();
//!
//! let perms = TrustTable::new(store);
//! let inside = BlockPos::new(3, 64, 3);
//! assert!(perms.allow_build(&bob, &world, inside).unwrap().is_some());
//!
//! perms.grant(claim.id, bob.clone(), TrustLevel::Build).unwrap();
//! assert!(perms.allow_build(&bob, &world, inside).unwrap().is_none());
//! ```

pub mod error;
pub mod traits;
pub mod trust;

pub use error::{PermsError, Result};
pub use traits::{Denial, Permissions};
pub use trust::{ClaimTrust, TrustLevel, TrustTable};
