//! Test fixtures and helpers.

use std::sync::Arc;

use claimguard::{ActorContext, ActorSession, BlockBreak, BlockPlace, Engine, EngineConfig};
use claimguard_core::{ActorId, BlockPos, Claim, Material, Vec3, WorldId};
use claimguard_perms::TrustTable;
use claimguard_store::{ClaimStore, MemoryClaimStore, NewClaim};
use tracing_subscriber::EnvFilter;

/// Engine over the in-memory store and trust table.
pub type TestEngine = Engine<Arc<MemoryClaimStore>, TrustTable<Arc<MemoryClaimStore>>>;

/// Floor of claims made through [`TestWorld::claim`].
pub const DEFAULT_FLOOR: i32 = 60;

/// Install a test log writer once per process. Honours `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("claimguard=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// One world with a claim index, a trust table and an engine.
pub struct TestWorld {
    pub world: WorldId,
    pub store: Arc<MemoryClaimStore>,
    pub engine: TestEngine,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Panics if `config` does not validate.
    pub fn with_config(config: EngineConfig) -> Self {
        let store = Arc::new(MemoryClaimStore::new());
        let perms = TrustTable::new(Arc::clone(&store));
        let engine = Engine::new(Arc::clone(&store), perms, config).expect("valid test config");
        Self {
            world: WorldId::new("world"),
            store,
            engine,
        }
    }

    /// Claim `x` by `z` for `owner` from [`DEFAULT_FLOOR`] upward.
    pub fn claim(&self, owner: &str, x: (i32, i32), z: (i32, i32)) -> Claim {
        self.create(Some(ActorId::new(owner)), x, z)
    }

    /// Administrative claim over `x` by `z`.
    pub fn admin_claim(&self, x: (i32, i32), z: (i32, i32)) -> Claim {
        self.create(None, x, z)
    }

    fn create(&self, owner: Option<ActorId>, x: (i32, i32), z: (i32, i32)) -> Claim {
        let result = self
            .store
            .create_claim(NewClaim::from_bounds(
                self.world.clone(),
                x.0,
                x.1,
                DEFAULT_FLOOR,
                DEFAULT_FLOOR,
                z.0,
                z.1,
                owner,
            ))
            .expect("store available");
        assert!(result.succeeded(), "fixture claim overlaps {:?}", result.claim());
        result.claim().clone()
    }

    /// An actor standing at the origin, with a fresh session.
    pub fn actor(&self, name: &str) -> (ActorContext, ActorSession) {
        self.actor_at(name, Vec3::new(0.0, 64.0, 0.0))
    }

    pub fn actor_at(&self, name: &str, location: Vec3) -> (ActorContext, ActorSession) {
        let actor = ActorContext::new(ActorId::new(name), location);
        let session = ActorSession::new(actor.id.clone());
        (actor, session)
    }

    pub fn place(&self, pos: BlockPos, material: Material) -> BlockPlace {
        BlockPlace {
            world: self.world.clone(),
            pos,
            material,
            support: None,
        }
    }

    pub fn break_at(&self, pos: BlockPos) -> BlockBreak {
        BlockBreak {
            world: self.world.clone(),
            pos,
        }
    }

    /// Stored state of `claim`.
    pub fn reload(&self, claim: &Claim) -> Claim {
        self.store
            .claim(claim.id)
            .expect("store available")
            .expect("claim still exists")
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration with every field spelled out, as a host would ship it.
pub fn sample_config_json() -> String {
    serde_json::json!({
        "fire_spreads": false,
        "fire_destroys": false,
        "add_items_to_claimed_chests": true,
        "automatic_claim_radius": 3,
        "claims_extend_into_ground_distance": 5,
        "max_claim_depth": 0,
        "prevent_theft": true,
        "claims_enabled_worlds": ["world"],
        "block_wilderness_water_buckets": true,
        "warn_on_build_outside": true,
        "creation_requires_permission": false,
        "block_sky_trees": true,
        "trash_blocks": ["cobblestone", "dirt"]
    })
    .to_string()
}
