//! Proptest generators for property-based testing.

use proptest::prelude::*;

use claimguard_core::{ActorId, BlockPos, Direction, Material, Vec3, WorldId};
use claimguard_store::NewClaim;

/// Coordinate within `span` blocks of the origin, at build height.
pub fn block_pos(span: i32) -> impl Strategy<Value = BlockPos> {
    (-span..=span, 0i32..=128, -span..=span).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

pub fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

pub fn horizontal_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ])
}

/// Dispenser launch velocity.
pub fn velocity() -> impl Strategy<Value = Vec3> {
    (-2.0f64..2.0, -1.0f64..1.0, -2.0f64..2.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

pub fn material() -> impl Strategy<Value = Material> {
    prop_oneof![
        Just(Material::Air),
        Just(Material::Chest),
        Just(Material::Fire),
        Just(Material::WaterBucket),
        Just(Material::LavaBucket),
        Just(Material::Sapling),
        Just(Material::Grass),
        Just(Material::Dirt),
        Just(Material::Cobblestone),
        Just(Material::Torch),
        "[a-z]{3,10}".prop_map(Material::Other),
    ]
}

/// One of a small cast of actors, so that owners collide.
pub fn actor_id() -> impl Strategy<Value = ActorId> {
    prop::sample::select(vec!["alice", "bob", "carol"]).prop_map(ActorId::new)
}

/// Parameters for one top-level claim.
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub length: i32,
    pub floor: i32,
    /// `None` for an administrative claim.
    pub owner: Option<ActorId>,
}

impl ClaimParams {
    pub fn to_request(&self, world: &WorldId) -> NewClaim {
        NewClaim::from_bounds(
            world.clone(),
            self.x,
            self.x + self.width - 1,
            self.floor,
            self.floor,
            self.z,
            self.z + self.length - 1,
            self.owner.clone(),
        )
    }
}

impl Arbitrary for ClaimParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            -40i32..=40,
            -40i32..=40,
            1i32..=12,
            1i32..=12,
            30i32..=70,
            prop::option::weighted(0.8, actor_id()),
        )
            .prop_map(|(x, z, width, length, floor, owner)| ClaimParams {
                x,
                z,
                width,
                length,
                floor,
                owner,
            })
            .boxed()
    }
}

/// Up to `max` claims; overlapping ones are rejected by the store.
pub fn claim_layout(max: usize) -> impl Strategy<Value = Vec<ClaimParams>> {
    prop::collection::vec(any::<ClaimParams>(), 0..=max)
}
