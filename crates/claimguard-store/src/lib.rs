//! # Claimguard Store
//!
//! Claim storage abstraction. The engine consumes claims through the
//! [`ClaimStore`] trait and never reaches into a concrete index.
//!
//! ## Key Types
//!
//! - [`ClaimStore`] - Point lookup, creation, downward extension, owner counts
//! - [`ClaimStoreExt`] - Derived helpers (ownership, top-level walk)
//! - [`MemoryClaimStore`] - In-memory spatial index for tests and small hosts
//! - [`NewClaim`] / [`CreateClaimResult`] - Claim creation request and result
//!
//! ## Usage
//!
//! ```rust
//! use claimguard_core::{ActorId, BlockPos, HeightMode, WorldId};
//! use claimguard_store::{ClaimStore, MemoryClaimStore, NewClaim};
//!
//! let store = MemoryClaimStore::new();
//! let world = WorldId::new("world");
//! let request = NewClaim::new(
//!     world.clone(),
//!     BlockPos::new(0, 60, 0),
//!     BlockPos::new(9, 64, 9),
//!     Some(ActorId::new("alice")),
//! );
//! assert!(store.create_claim(request).unwrap().succeeded());
//!
//! let found = store
//!     .claim_at(&world, BlockPos::new(4, 64, 4), HeightMode::Respect, None)
//!     .unwrap();
//! assert!(found.is_some());
//! ```
//!
//! ## Design Notes
//!
//! - **Most specific wins**: lookups return a subdivision over its parent.
//! - **Overlap rejection**: top-level claims may not share any x/z column.
//! - **One level of nesting**: a subdivision may not itself be subdivided.
//! - **Hints are advisory**: a stale hint is re-validated, never trusted.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryClaimStore;
pub use traits::{ClaimStore, ClaimStoreExt, CreateClaimResult, NewClaim};
