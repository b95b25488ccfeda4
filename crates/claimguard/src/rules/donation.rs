//! Donating the held stack to a chest one cannot open.
//!
//! Hitting a protected chest once explains the gesture; hitting the same
//! chest again drops the held stack into it.

use claimguard_core::{GameMode, Inventory, ItemStack, Material};
use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::error::Result;
use crate::event::{ActorContext, BlockDamage, MutationKind};
use crate::outcome::{MessageKey, Outcome};
use crate::session::{ActorSession, Strike};

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// An actor starting to break a block.
    ///
    /// `held` and `chest` are only touched on a completed donation.
    pub fn on_block_damage(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        event: &BlockDamage,
        held: &mut Option<ItemStack>,
        chest: &mut Inventory,
    ) -> Outcome {
        let result = self.evaluate_damage(actor, session, event, held, chest);
        self.settle(MutationKind::BlockDamage, result)
    }

    fn evaluate_damage(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        event: &BlockDamage,
        held: &mut Option<ItemStack>,
        chest: &mut Inventory,
    ) -> Result<Outcome> {
        if !self.config.add_items_to_claimed_chests
            || event.block != Material::Chest
            || actor.game_mode == GameMode::Creative
            || held.as_ref().map_or(true, ItemStack::is_empty)
        {
            return Ok(Outcome::allow());
        }

        let Some(claim) = self
            .resolver(&event.world)
            .resolve(event.pos, session.cached_last_claim.as_ref())?
        else {
            return Ok(Outcome::allow());
        };
        session.cached_last_claim = Some(claim.clone());

        if self.perms.allow_container_access(&claim, &actor.id)?.is_none() {
            return Ok(Outcome::allow());
        }

        if session.strike_chest(&event.world, event.pos) == Strike::First {
            return Ok(Outcome::allow().with(MessageKey::DonateItemsInstruction));
        }

        if session.under_siege {
            return Ok(Outcome::deny_with(MessageKey::SiegeNoDrop));
        }

        if chest.first_empty().is_none() {
            return Ok(Outcome::deny_with(MessageKey::ChestFull));
        }

        if let Some(stack) = held.take() {
            tracing::debug!(
                "{} donated {} {:?} to chest at {}",
                actor.id,
                stack.amount(),
                stack.material,
                event.pos
            );
            *held = chest.add_item(stack);
        }
        Ok(Outcome::allow().with(MessageKey::DonationSuccess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use claimguard_core::{ActorId, BlockPos, ClaimId, Vec3, WorldId};
    use claimguard_perms::{TrustLevel, TrustTable};
    use claimguard_store::{MemoryClaimStore, NewClaim};
    use std::sync::Arc;

    type TestEngine = Engine<Arc<MemoryClaimStore>, TrustTable<Arc<MemoryClaimStore>>>;

    struct Fixture {
        engine: TestEngine,
        bob: ActorContext,
        session: ActorSession,
    }

    fn fixture(config: EngineConfig) -> Fixture {
        let store = Arc::new(MemoryClaimStore::new());
        store
            .create_claim(NewClaim::from_bounds(
                WorldId::new("world"),
                0,
                9,
                0,
                64,
                0,
                9,
                Some(ActorId::new("alice")),
            ))
            .unwrap();
        let perms = TrustTable::new(Arc::clone(&store));
        let bob = ActorContext::new(ActorId::new("bob"), Vec3::new(5.0, 64.0, 5.0));
        let session = ActorSession::new(bob.id.clone());
        Fixture {
            engine: Engine::new(store, perms, config).unwrap(),
            bob,
            session,
        }
    }

    fn hit(pos: BlockPos) -> BlockDamage {
        BlockDamage {
            world: WorldId::new("world"),
            pos,
            block: Material::Chest,
        }
    }

    fn cobble(amount: u32) -> Option<ItemStack> {
        Some(ItemStack::new(Material::Cobblestone, amount).unwrap())
    }

    #[test]
    fn test_two_hits_donate() {
        let mut f = fixture(EngineConfig::default());
        let mut held = cobble(10);
        let mut chest = Inventory::new(27);
        let pos = BlockPos::new(5, 64, 5);

        let first = f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        assert!(first.has_message(&MessageKey::DonateItemsInstruction));
        assert_eq!(held, cobble(10));
        assert_eq!(chest.count(&Material::Cobblestone), 0);

        let second = f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        assert!(!second.is_cancelled());
        assert!(second.has_message(&MessageKey::DonationSuccess));
        assert!(held.is_none());
        assert_eq!(chest.count(&Material::Cobblestone), 10);
    }

    #[test]
    fn test_other_chest_restarts_handshake() {
        let mut f = fixture(EngineConfig::default());
        let mut held = cobble(1);
        let mut chest = Inventory::new(27);

        f.engine.on_block_damage(&f.bob, &mut f.session, &hit(BlockPos::new(1, 64, 1)), &mut held, &mut chest);
        let other = f.engine.on_block_damage(
            &f.bob,
            &mut f.session,
            &hit(BlockPos::new(2, 64, 2)),
            &mut held,
            &mut chest,
        );
        assert!(other.has_message(&MessageKey::DonateItemsInstruction));
        assert!(held.is_some());
    }

    #[test]
    fn test_full_chest_leaves_stack_in_hand() {
        let mut f = fixture(EngineConfig::default());
        let mut held = cobble(3);
        let mut chest = Inventory::new(1);
        chest
            .set(0, Some(ItemStack::new(Material::Cobblestone, 5).unwrap()))
            .unwrap();
        let pos = BlockPos::new(5, 64, 5);

        f.engine.on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        let second = f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        assert!(second.is_cancelled());
        assert!(second.has_message(&MessageKey::ChestFull));
        assert_eq!(held, cobble(3));
        assert_eq!(chest.count(&Material::Cobblestone), 5);
    }

    #[test]
    fn test_siege_blocks_drop() {
        let mut f = fixture(EngineConfig::default());
        let mut held = cobble(3);
        let mut chest = Inventory::new(27);
        let pos = BlockPos::new(5, 64, 5);

        f.engine.on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        f.session.under_siege = true;
        let second = f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest);
        assert!(second.is_cancelled());
        assert!(second.has_message(&MessageKey::SiegeNoDrop));
        assert_eq!(held, cobble(3));
    }

    #[test]
    fn test_gate_conditions() {
        let mut f = fixture(EngineConfig::default());
        let mut chest = Inventory::new(27);
        let pos = BlockPos::new(5, 64, 5);

        let mut empty_hand = None;
        assert!(f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut empty_hand, &mut chest)
            .feedback
            .is_empty());

        let mut held = cobble(1);
        let wild = f.engine.on_block_damage(
            &f.bob,
            &mut f.session,
            &hit(BlockPos::new(50, 64, 50)),
            &mut held,
            &mut chest,
        );
        assert!(wild.feedback.is_empty());

        f.bob.game_mode = GameMode::Creative;
        assert!(f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest)
            .feedback
            .is_empty());
        f.bob.game_mode = GameMode::Survival;

        f.engine
            .perms()
            .grant(ClaimId(1), f.bob.id.clone(), TrustLevel::Container)
            .unwrap();
        assert!(f
            .engine
            .on_block_damage(&f.bob, &mut f.session, &hit(pos), &mut held, &mut chest)
            .feedback
            .is_empty());
        assert!(f.session.pending_chest_donation.is_none());
    }
}
