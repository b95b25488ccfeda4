//! # Claimguard Core
//!
//! Pure domain primitives shared by every claimguard crate: block coordinates,
//! directions, materials, item stacks, inventories and claims.
//!
//! This crate contains no I/O, no storage and no policy. It is plain data plus
//! the geometry needed to reason about it.
//!
//! ## Key Types
//!
//! - [`BlockPos`] - Integer block coordinate
//! - [`Direction`] - One of the six block faces
//! - [`Claim`] - An owned, axis-aligned region of a world
//! - [`Ownership`] - Tagged owner identity of a coordinate
//! - [`Inventory`] - Slot container used by the chest donation rule

pub mod claim;
pub mod error;
pub mod geometry;
pub mod material;
pub mod types;

pub use claim::{Claim, HeightMode, Ownership};
pub use error::{CoreError, Result};
pub use geometry::{BlockPos, Direction, Vec3};
pub use material::{GameMode, Inventory, ItemStack, Material, MAX_STACK_SIZE};
pub use types::{ActorId, ClaimId, WorldId};
