//! Block break and place.

use claimguard_core::{BlockPos, Claim, Material, WorldId};
use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::error::{EngineError, Result};
use crate::event::{ActorContext, BlockBreak, BlockPlace, MutationKind, Support, WorldView};
use crate::outcome::{MessageKey, Outcome};
use crate::session::ActorSession;

/// Fire may not be placed closer than this (squared distance) to another
/// actor in a world without PvP.
pub const FIRE_PROXIMITY_SQUARED: f64 = 9.0;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// An actor breaking a block.
    pub fn on_block_break(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        event: &BlockBreak,
    ) -> Outcome {
        let result = self.evaluate_break(actor, session, event);
        self.settle(MutationKind::BlockBreak, result)
    }

    /// An actor placing a block.
    pub fn on_block_place(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        view: &WorldView,
        event: &BlockPlace,
    ) -> Outcome {
        let result = self.evaluate_place(actor, session, view, event);
        self.settle(MutationKind::BlockPlace, result)
    }

    fn evaluate_break(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        event: &BlockBreak,
    ) -> Result<Outcome> {
        if let Some(message) = self.permission_gate(&event.world, event.pos, |perms| {
            perms.allow_break(&actor.id, &event.world, event.pos)
        })? {
            return Ok(Outcome::deny_with(message));
        }

        self.follow_digging(actor, session, &event.world, event.pos)?;
        Ok(Outcome::allow())
    }

    fn evaluate_place(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        view: &WorldView,
        event: &BlockPlace,
    ) -> Result<Outcome> {
        if let Some(message) = fire_too_close(actor, view, event) {
            return Ok(Outcome::deny_with(message));
        }

        if let Some(message) = self.permission_gate(&event.world, event.pos, |perms| {
            perms.allow_build(&actor.id, &event.world, event.pos)
        })? {
            return Ok(Outcome::deny_with(message));
        }

        let mut outcome = Outcome::allow();

        if self
            .follow_digging(actor, session, &event.world, event.pos)?
            .is_some()
        {
            session.rearm_warning();
            return Ok(outcome);
        }

        let claims_enabled = self.config.claims_enabled_for(&event.world);

        if event.material == Material::Chest
            && self.config.automatic_claim_radius >= 0
            && claims_enabled
        {
            self.bootstrap_claim(actor, session, &event.world, event.pos, &mut outcome)?;
        } else if event.material == Material::Sapling && self.config.block_sky_trees {
            if event.support.as_ref().is_some_and(is_sky_tree) {
                tracing::debug!("sapling at {} in {} has no ground", event.pos, event.world);
                return Ok(Outcome::deny());
            }
        } else if self.config.warn_on_build_outside
            && !self.config.is_trash(&event.material)
            && claims_enabled
            && self.store.claim_count(&actor.id)? > 0
            && session.count_unclaimed_placement()
        {
            outcome.notify(MessageKey::BuildingOutsideClaims);
            if let Some(claim) = self.current_cached_claim(session)? {
                if self.may_build_in(&claim, &actor.id) {
                    outcome.visualize(claim, event.pos.y);
                }
            }
        }

        Ok(outcome)
    }

    /// Resolve the claim column above `pos` and, when the actor is digging or
    /// building beneath the claim floor with build rights, sink the floor to
    /// follow them.
    fn follow_digging(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        world: &WorldId,
        pos: BlockPos,
    ) -> Result<Option<Claim>> {
        let resolver = self.resolver(world);
        let Some(mut claim) = resolver.resolve_column(pos, session.cached_last_claim.as_ref())?
        else {
            return Ok(None);
        };

        if pos.y < claim.floor() && self.may_build_in(&claim, &actor.id) {
            let new_floor = pos
                .y
                .checked_sub(self.config.claims_extend_into_ground_distance)
                .ok_or_else(|| {
                    EngineError::OutOfRange(format!("floor below {} for claim {}", pos, claim.id))
                })?;
            claim = self.store.extend_claim_downward(claim.id, new_floor)?;
            tracing::info!(
                "claim {} extended down to y={} after {} worked at {}",
                claim.id,
                claim.floor(),
                actor.id,
                pos
            );
        }

        session.cached_last_claim = Some(claim.clone());
        Ok(Some(claim))
    }

    /// The session's cached claim as it stands in the store now.
    fn current_cached_claim(&self, session: &ActorSession) -> Result<Option<Claim>> {
        match &session.cached_last_claim {
            Some(cached) => Ok(self.store.claim(cached.id)?),
            None => Ok(None),
        }
    }
}

/// Fire placed next to another actor in a world without PvP.
fn fire_too_close(
    actor: &ActorContext,
    view: &WorldView,
    event: &BlockPlace,
) -> Option<MessageKey> {
    if event.material != Material::Fire || view.pvp || actor.may_ignite_near_actors {
        return None;
    }
    let fire = event.pos.corner();
    view.actors
        .iter()
        .find(|other| {
            other.id != actor.id && other.location.distance_squared(&fire) < FIRE_PROXIMITY_SQUARED
        })
        .map(|other| MessageKey::PlayerTooCloseForFire {
            other: other.id.clone(),
        })
}

/// A sapling set on anything but grass with air in the two blocks below it.
fn is_sky_tree(support: &Support) -> bool {
    support.against != Material::Grass && (support.below.is_air() || support.below_two.is_air())
}
