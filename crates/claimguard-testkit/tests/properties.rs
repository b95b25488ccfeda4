//! Boundary properties over random claim layouts.

use proptest::prelude::*;

use claimguard::core::{ActorId, BlockPos, Claim, ClaimId, Direction, HeightMode, Ownership};
use claimguard::store::ClaimStore;
use claimguard::{Dispense, EnvironmentEvent, PistonExtend, StructureGrow};
use claimguard_testkit::generators::{block_pos, claim_layout, direction, material, velocity, ClaimParams};
use claimguard_testkit::TestWorld;

fn populate(layout: &[ClaimParams]) -> TestWorld {
    let world = TestWorld::new();
    for params in layout {
        world
            .store
            .create_claim(params.to_request(&world.world))
            .unwrap();
    }
    world
}

/// The square a shrink-to-fit attempt at `radius` would request.
fn square_at(world: &TestWorld, pos: BlockPos, radius: i32) -> Claim {
    let depth = world.engine.config().claims_extend_into_ground_distance;
    Claim::new(
        ClaimId(0),
        world.world.clone(),
        BlockPos::new(pos.x - radius, pos.y - depth, pos.z - radius),
        BlockPos::new(pos.x + radius, pos.y, pos.z + radius),
        None,
        None,
    )
}

fn ownership(world: &TestWorld, pos: BlockPos) -> Ownership {
    world.engine.resolver(&world.world).ownership(pos).unwrap()
}

proptest! {
    #[test]
    fn allowed_pushes_never_cross_owners(
        layout in claim_layout(6),
        piston in block_pos(40),
        dir in direction(),
        len in 0usize..4,
    ) {
        let world = populate(&layout);
        let moving: Vec<BlockPos> = (1..=len as i32)
            .map(|i| {
                let (dx, dy, dz) = dir.delta();
                piston.offset(dx * i, dy * i, dz * i)
            })
            .collect();
        let event = EnvironmentEvent::PistonExtend(PistonExtend {
            world: world.world.clone(),
            piston,
            piston_material: claimguard::core::Material::Piston,
            direction: dir,
            moving: moving.clone(),
        });

        let outcome = world.engine.evaluate(&event);
        prop_assert_eq!(&outcome, &world.engine.evaluate(&event));

        if !outcome.is_cancelled() {
            let piston_owner = ownership(&world, piston);
            for &pos in &moving {
                let owner = ownership(&world, pos);
                prop_assert!(!owner.is_claimed() || owner == piston_owner);
                if dir.is_horizontal() {
                    prop_assert_eq!(owner, ownership(&world, pos.relative(dir)));
                }
            }
        } else if !outcome.compensation().is_empty() {
            prop_assert_eq!(outcome.compensation().len(), 3);
        }
    }

    #[test]
    fn allowed_dispenses_stay_in_one_claim(
        layout in claim_layout(6),
        at in block_pos(40),
        item in material(),
        v in velocity(),
    ) {
        let world = populate(&layout);
        let outcome = world.engine.evaluate(&EnvironmentEvent::Dispense(Dispense {
            world: world.world.clone(),
            dispenser: at,
            item: item.clone(),
            velocity: v,
        }));

        let resolver = world.engine.resolver(&world.world);
        let from = resolver.resolve(at, None).unwrap();
        let to = resolver
            .resolve(at.relative(Direction::dominant_horizontal(v)), None)
            .unwrap();
        if !outcome.is_cancelled() {
            match (&from, &to) {
                (None, None) => prop_assert!(!item.is_fluid_bucket()),
                (Some(a), Some(b)) => prop_assert_eq!(a.id, b.id),
                _ => prop_assert!(false, "dispense crossed a claim edge"),
            }
        }
    }

    #[test]
    fn growth_partitions_blocks_in_order(
        layout in claim_layout(6),
        root in block_pos(40),
        blocks in prop::collection::vec(block_pos(40), 0..12),
    ) {
        let world = populate(&layout);
        let outcome = world.engine.on_structure_grow(&StructureGrow {
            world: world.world.clone(),
            root,
            blocks: blocks.clone(),
        });

        prop_assert_eq!(outcome.kept.len() + outcome.vetoed.len(), blocks.len());
        let mut kept = outcome.kept.iter();
        let mut vetoed = outcome.vetoed.iter();
        for pos in &blocks {
            let next = if outcome.kept.contains(pos) { kept.next() } else { vetoed.next() };
            prop_assert_eq!(next, Some(pos));
        }

        let root_owner = ownership(&world, root);
        for &pos in &outcome.vetoed {
            let owner = ownership(&world, pos);
            prop_assert!(owner.is_claimed());
            prop_assert_ne!(&owner, &root_owner);
        }
    }

    #[test]
    fn shrink_to_fit_takes_the_largest_free_square(
        layout in claim_layout(8),
        pos in block_pos(40),
        radius in 0i32..8,
    ) {
        let world = populate(&layout);
        let existing = world.store.all_claims().unwrap();
        let owner = ActorId::new("dave");
        let blocked = |r: i32| {
            let square = square_at(&world, pos, r);
            existing.iter().any(|c| c.overlaps(&square))
        };

        let created = world
            .engine
            .shrink_to_fit(&owner, &world.world, pos, radius)
            .unwrap();

        match created {
            Some(claim) => {
                let got = (claim.greater.x - claim.lesser.x) / 2;
                prop_assert_eq!(claim.greater.z - claim.lesser.z, got * 2);
                prop_assert!(got <= radius);
                prop_assert!(!blocked(got));
                for larger in got + 1..=radius {
                    prop_assert!(blocked(larger), "radius {} was free", larger);
                }
                prop_assert!(claim.contains(&world.world, pos, HeightMode::Respect));
                prop_assert!(claim.is_owned_by(&owner));
                prop_assert!(existing.iter().all(|c| !c.overlaps(&claim)));
            }
            None => {
                for r in 0..=radius {
                    prop_assert!(blocked(r), "radius {} was free", r);
                }
                prop_assert_eq!(world.store.claim_count(&owner).unwrap(), 0);
                prop_assert_eq!(world.store.all_claims().unwrap().len(), existing.len());
            }
        }
    }
}
