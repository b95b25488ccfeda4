//! Automatic claim creation around an actor's first chest.

use claimguard_core::{ActorId, BlockPos, Claim, WorldId};
use claimguard_perms::Permissions;
use claimguard_store::{ClaimStore, CreateClaimResult, NewClaim};

use crate::engine::Engine;
use crate::error::{EngineError, Result};
use crate::event::ActorContext;
use crate::outcome::{MessageKey, Outcome};
use crate::session::ActorSession;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// Claim the area around a chest placed in unclaimed space.
    ///
    /// Never cancels the placement; everything it has to say is appended to
    /// `outcome`.
    pub(crate) fn bootstrap_claim(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        world: &WorldId,
        pos: BlockPos,
        outcome: &mut Outcome,
    ) -> Result<()> {
        if self.config.prevent_theft && pos.y < self.config.max_claim_depth {
            outcome.notify(MessageKey::TooDeepToClaim);
            return Ok(());
        }

        if self.store.claim_count(&actor.id)? == 0 {
            let radius = self.config.automatic_claim_radius;
            if radius == 0 {
                let created = self
                    .store
                    .create_claim(NewClaim::new(world.clone(), pos, pos, Some(actor.id.clone())))?;
                if let CreateClaimResult::Created(claim) = created {
                    outcome.notify(MessageKey::ChestClaimConfirmation);
                    session.cached_last_claim = Some(claim);
                }
            } else if let Some(claim) = self.shrink_to_fit(&actor.id, world, pos, radius)? {
                outcome.notify(MessageKey::AutomaticClaimNotification);
                outcome.visualize(claim.clone(), pos.y);
                session.cached_last_claim = Some(claim);
            }

            outcome.notify(MessageKey::TrustCommandAdvertisement);
            if !self.config.creation_requires_permission {
                outcome.notify(MessageKey::GoldenShovelAdvertisement);
            }
        }

        if self.config.prevent_theft
            && self
                .resolver(world)
                .resolve(pos, session.cached_last_claim.as_ref())?
                .is_none()
        {
            outcome.notify(MessageKey::UnprotectedChestWarning);
        }
        Ok(())
    }

    /// Create the largest square claim centred on `pos` that fits among the
    /// existing claims.
    ///
    /// Starts at `radius` and gives up one block at a time; radius 0 is the
    /// last attempt. The claim reaches down
    /// `claims_extend_into_ground_distance` blocks below `pos`. A radius or
    /// depth that would push a corner past the `i32` range is an
    /// [`EngineError::OutOfRange`].
    pub fn shrink_to_fit(
        &self,
        owner: &ActorId,
        world: &WorldId,
        pos: BlockPos,
        radius: i32,
    ) -> Result<Option<Claim>> {
        let requested = radius;
        let out_of_range =
            || EngineError::OutOfRange(format!("radius {} around {}", requested, pos));
        let floor = pos
            .y
            .checked_sub(self.config.claims_extend_into_ground_distance)
            .ok_or_else(out_of_range)?;

        let mut radius = radius;
        while radius >= 0 {
            let (x0, x1) = span(pos.x, radius).ok_or_else(out_of_range)?;
            let (z0, z1) = span(pos.z, radius).ok_or_else(out_of_range)?;
            let request = NewClaim::from_bounds(
                world.clone(),
                x0,
                x1,
                floor,
                pos.y,
                z0,
                z1,
                Some(owner.clone()),
            );
            match self.store.create_claim(request)? {
                CreateClaimResult::Created(claim) => {
                    tracing::debug!("automatic claim {} for {} at radius {}", claim.id, owner, radius);
                    return Ok(Some(claim));
                }
                CreateClaimResult::Overlap { existing } => {
                    tracing::debug!("radius {} around {} overlaps {}", radius, pos, existing.id);
                    radius -= 1;
                }
            }
        }
        Ok(None)
    }
}

/// `center - radius ..= center + radius`, if representable.
fn span(center: i32, radius: i32) -> Option<(i32, i32)> {
    Some((center.checked_sub(radius)?, center.checked_add(radius)?))
}
