//! Boundary resolution: which claim owns a coordinate, and whether a
//! mutation between two coordinates crosses an ownership boundary.

use claimguard_core::{BlockPos, Claim, HeightMode, Ownership, WorldId};
use claimguard_store::{ClaimStore, ClaimStoreExt};

use crate::error::Result;

/// Claim lookups within one world.
pub struct BoundaryResolver<'a, S: ClaimStore + ?Sized> {
    store: &'a S,
    world: &'a WorldId,
}

impl<'a, S: ClaimStore + ?Sized> BoundaryResolver<'a, S> {
    pub fn new(store: &'a S, world: &'a WorldId) -> Self {
        Self { store, world }
    }

    pub fn world(&self) -> &WorldId {
        self.world
    }

    /// Claim owning `pos`, honouring claim floors.
    pub fn resolve(&self, pos: BlockPos, hint: Option<&Claim>) -> Result<Option<Claim>> {
        Ok(self
            .store
            .claim_at(self.world, pos, HeightMode::Respect, hint)?)
    }

    /// Claim whose column contains `pos`, even below its floor.
    pub fn resolve_column(&self, pos: BlockPos, hint: Option<&Claim>) -> Result<Option<Claim>> {
        Ok(self
            .store
            .claim_at(self.world, pos, HeightMode::Ignore, hint)?)
    }

    /// Owner of `pos`. A subdivision belongs to whoever owns its parent.
    pub fn ownership(&self, pos: BlockPos) -> Result<Ownership> {
        match self.resolve(pos, None)? {
            Some(claim) => Ok(self.store.top_level(claim)?.ownership()),
            None => Ok(Ownership::Unclaimed),
        }
    }

    /// Whether `a` and `b` have different owners.
    ///
    /// Two unclaimed coordinates, or two claims of the same owner, do not
    /// constitute a crossing.
    pub fn crosses_boundary(&self, a: BlockPos, b: BlockPos) -> Result<bool> {
        Ok(self.ownership(a)? != self.ownership(b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimguard_core::ActorId;
    use claimguard_store::{MemoryClaimStore, NewClaim};
    use proptest::prelude::*;

    fn store_with_claims() -> MemoryClaimStore {
        let store = MemoryClaimStore::new();
        let world = WorldId::new("world");
        for (x0, owner) in [(0, Some("alice")), (10, Some("alice")), (20, Some("bob")), (30, None)] {
            store
                .create_claim(NewClaim::from_bounds(
                    world.clone(),
                    x0,
                    x0 + 9,
                    60,
                    64,
                    0,
                    9,
                    owner.map(ActorId::new),
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_same_owner_is_not_a_crossing() {
        let store = store_with_claims();
        let world = WorldId::new("world");
        let resolver = BoundaryResolver::new(&store, &world);

        // Two distinct claims, both alice's.
        assert!(!resolver
            .crosses_boundary(BlockPos::new(9, 64, 5), BlockPos::new(10, 64, 5))
            .unwrap());
        // alice -> bob
        assert!(resolver
            .crosses_boundary(BlockPos::new(19, 64, 5), BlockPos::new(20, 64, 5))
            .unwrap());
        // bob -> admin
        assert!(resolver
            .crosses_boundary(BlockPos::new(29, 64, 5), BlockPos::new(30, 64, 5))
            .unwrap());
        // admin -> wilderness
        assert!(resolver
            .crosses_boundary(BlockPos::new(39, 64, 5), BlockPos::new(40, 64, 5))
            .unwrap());
    }

    #[test]
    fn test_subdivision_is_not_a_boundary() {
        let store = MemoryClaimStore::new();
        let world = WorldId::new("world");
        let parent = store
            .create_claim(NewClaim::from_bounds(
                world.clone(),
                0,
                19,
                0,
                64,
                0,
                9,
                Some(ActorId::new("alice")),
            ))
            .unwrap()
            .claim()
            .clone();
        store
            .create_claim(
                NewClaim::from_bounds(world.clone(), 10, 19, 0, 64, 0, 9, None)
                    .subdivision_of(parent.id),
            )
            .unwrap();
        let resolver = BoundaryResolver::new(&store, &world);

        assert_eq!(
            resolver.ownership(BlockPos::new(12, 30, 5)).unwrap(),
            Ownership::Player(ActorId::new("alice"))
        );
        assert!(!resolver
            .crosses_boundary(BlockPos::new(9, 30, 5), BlockPos::new(10, 30, 5))
            .unwrap());
        assert!(resolver
            .crosses_boundary(BlockPos::new(19, 30, 5), BlockPos::new(20, 30, 5))
            .unwrap());
    }

    #[test]
    fn test_below_floor_only_in_column_lookup() {
        let store = store_with_claims();
        let world = WorldId::new("world");
        let resolver = BoundaryResolver::new(&store, &world);
        let deep = BlockPos::new(5, 10, 5);

        assert!(resolver.resolve(deep, None).unwrap().is_none());
        assert!(resolver.resolve_column(deep, None).unwrap().is_some());
    }

    proptest! {
        #[test]
        fn test_unclaimed_never_crosses(
            ax in 100i32..1000, az in -1000i32..1000,
            bx in 100i32..1000, bz in -1000i32..1000,
        ) {
            let store = store_with_claims();
            let world = WorldId::new("world");
            let resolver = BoundaryResolver::new(&store, &world);
            prop_assert!(!resolver
                .crosses_boundary(BlockPos::new(ax, 64, az), BlockPos::new(bx, 64, bz))
                .unwrap());
        }

        #[test]
        fn test_crossing_is_symmetric(ax in -5i32..45, bx in -5i32..45, z in -2i32..12) {
            let store = store_with_claims();
            let world = WorldId::new("world");
            let resolver = BoundaryResolver::new(&store, &world);
            let a = BlockPos::new(ax, 64, z);
            let b = BlockPos::new(bx, 64, z);
            prop_assert_eq!(
                resolver.crosses_boundary(a, b).unwrap(),
                resolver.crosses_boundary(b, a).unwrap()
            );
        }
    }
}
