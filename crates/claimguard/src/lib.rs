//! # Claimguard
//!
//! Block-event authorization for owned claims. Every attempt to change the
//! world is judged against the claim index and the claim's trust list, and
//! the host is told whether to let it happen.
//!
//! ## Overview
//!
//! The [`Engine`] answers one event at a time:
//!
//! - **Break/place**: trust checks, claim floors that follow the owner down,
//!   a first-chest claim, and a periodic reminder to build inside claims
//! - **Environment**: pistons, dispensers, fire, and fluids may not carry
//!   blocks or damage over a claim edge
//! - **Growth**: trees only grow into land owned by whoever owns their root
//! - **Donation**: hitting a locked chest twice drops the held stack into it
//! - **Signs**: new sign text is written to the audit log
//!
//! ## Key Types
//!
//! - [`Engine`] - The rules, generic over a claim store and a trust source
//! - [`Outcome`] - Allow, deny, or deny with compensating world changes,
//!   plus messages and claim visualizations for the actor
//! - [`ActorSession`] - Per-actor memory between events
//! - [`EngineConfig`] - Server settings, loadable from JSON
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use claimguard::{ActorContext, ActorSession, BlockBreak, Engine, EngineConfig};
//! use claimguard::core::{ActorId, BlockPos, Vec3, WorldId};
//! use claimguard::perms::TrustTable;
//! use claimguard::store::{ClaimStore, MemoryClaimStore, NewClaim};
//!
//! let store = Arc::new(MemoryClaimStore::new());
//! let world = WorldId::new("world");
//! store
//!     .create_claim(NewClaim::new(
//!         world.clone(),
//!         BlockPos::new(0, 60, 0),
//!         BlockPos::new(9, 64, 9),
//!         Some(ActorId::new("alice")),
//!     ))
//!     .unwrap();
//!
//! let perms = TrustTable::new(Arc::clone(&store));
//! let engine = Engine::new(store, perms, EngineConfig::default()).unwrap();
//!
//! let bob = ActorContext::new(ActorId::new("bob"), Vec3::new(4.0, 64.0, 4.0));
//! let mut session = ActorSession::new(bob.id.clone());
//! let outcome = engine.on_block_break(
//!     &bob,
//!     &mut session,
//!     &BlockBreak { world, pos: BlockPos::new(4, 64, 4) },
//! );
//! assert!(outcome.is_cancelled());
//! ```
//!
//! ## Re-exports
//!
//! - `claimguard::core` - Coordinates, claims, materials, inventories
//! - `claimguard::store` - Claim storage abstraction and in-memory index
//! - `claimguard::perms` - Trust decisions

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod outcome;
pub mod resolver;
pub mod rules;
pub mod session;

pub use claimguard_core as core;
pub use claimguard_perms as perms;
pub use claimguard_store as store;

pub use config::{EngineConfig, MAX_AUTOMATIC_CLAIM_RADIUS, MAX_GROUND_EXTENSION};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use event::{
    ActorContext, BlockBreak, BlockDamage, BlockPlace, Burn, Dispense, EnvironmentEvent,
    EventPriority, FluidFlow, Ignite, IgniteCause, MutationKind, PistonExtend, PistonRetract,
    PresentActor, SignChange, Spread, StructureGrow, Support, WorldView,
};
pub use outcome::{Compensation, Decision, Feedback, GrowthOutcome, MessageKey, Outcome, Tone};
pub use resolver::BoundaryResolver;
pub use rules::{AUDIT_TARGET, FIRE_PROXIMITY_SQUARED};
pub use session::{ActorSession, SessionRegistry, Strike, WARNING_COOLDOWN};
