//! # Claimguard Testkit
//!
//! Testing utilities for claimguard.
//!
//! ## Overview
//!
//! - **Fixtures**: a [`TestWorld`] wiring an in-memory claim index, a trust
//!   table and an engine together
//! - **Generators**: proptest strategies for coordinates, materials and claim
//!   layouts
//!
//! ## Test Fixtures
//!
//! ```rust
//! use claimguard::core::{BlockPos, Material};
//! use claimguard_testkit::TestWorld;
//!
//! let world = TestWorld::new();
//! world.claim("alice", (0, 9), (0, 9));
//!
//! let (bob, mut session) = world.actor("bob");
//! let outcome = world.engine.on_block_place(
//!     &bob,
//!     &mut session,
//!     &Default::default(),
//!     &world.place(BlockPos::new(4, 64, 4), Material::Dirt),
//! );
//! assert!(outcome.is_cancelled());
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{init_tracing, TestEngine, TestWorld};
