//! The Engine: evaluates one mutation attempt at a time against the claim
//! store and the permission collaborator.
//!
//! The rule for each mutation category lives in [`crate::rules`]; this module
//! holds the shared plumbing: construction, dispatch, and turning collaborator
//! failures into safe decisions.

use claimguard_core::{ActorId, BlockPos, Claim, WorldId};
use claimguard_perms::{Denial, Permissions};
use claimguard_store::ClaimStore;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::event::{EnvironmentEvent, MutationKind};
use crate::outcome::{MessageKey, Outcome};
use crate::resolver::BoundaryResolver;

/// The block-event authorization engine.
///
/// Holds no per-actor state: sessions are passed in by the host with each
/// actor-initiated event.
pub struct Engine<S: ClaimStore, P: Permissions> {
    /// Claim index.
    pub(crate) store: S,
    /// Trust decisions.
    pub(crate) perms: P,
    /// Read-only configuration.
    pub(crate) config: EngineConfig,
}

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// Create a new engine, validating the configuration.
    pub fn new(store: S, perms: P, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            perms,
            config,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn perms(&self) -> &P {
        &self.perms
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver<'a>(&'a self, world: &'a WorldId) -> BoundaryResolver<'a, S> {
        BoundaryResolver::new(&self.store, world)
    }

    /// Evaluate an event that has no acting player.
    pub fn evaluate(&self, event: &EnvironmentEvent) -> Outcome {
        match event {
            EnvironmentEvent::PistonExtend(e) => self.on_piston_extend(e),
            EnvironmentEvent::PistonRetract(e) => self.on_piston_retract(e),
            EnvironmentEvent::Dispense(e) => self.on_dispense(e),
            EnvironmentEvent::Ignite(e) => self.on_ignite(e),
            EnvironmentEvent::Spread(e) => self.on_spread(e),
            EnvironmentEvent::Burn(e) => self.on_burn(e),
            EnvironmentEvent::FluidFlow(e) => self.on_fluid_flow(e),
        }
    }

    /// Settle a rule result, denying when a collaborator failed.
    pub(crate) fn settle(&self, kind: MutationKind, result: Result<Outcome>) -> Outcome {
        result.unwrap_or_else(|e| {
            tracing::warn!("{:?} denied: collaborator failure: {}", kind, e);
            Outcome::deny_with(MessageKey::ProtectionUnavailable)
        })
    }

    /// Run a build/break permission check.
    ///
    /// When the permission collaborator cannot answer, the location decides:
    /// unclaimed ground is allowed, claimed ground is refused. If the store
    /// cannot answer either, the error propagates and the event is denied.
    pub(crate) fn permission_gate(
        &self,
        world: &WorldId,
        pos: BlockPos,
        check: impl FnOnce(&P) -> claimguard_perms::Result<Option<Denial>>,
    ) -> Result<Option<MessageKey>> {
        match check(&self.perms) {
            Ok(None) => Ok(None),
            Ok(Some(denial)) => Ok(Some(MessageKey::Denied(denial.reason))),
            Err(e) => {
                tracing::warn!("permission check at {} in {} failed: {}", pos, world, e);
                let claimed = self.resolver(world).resolve(pos, None)?.is_some();
                Ok(claimed.then_some(MessageKey::ProtectionUnavailable))
            }
        }
    }

    /// Whether `actor` may build in `claim`; an unanswerable check counts
    /// as no.
    pub(crate) fn may_build_in(&self, claim: &Claim, actor: &ActorId) -> bool {
        match self.perms.allow_claim_build(claim, actor) {
            Ok(denial) => denial.is_none(),
            Err(e) => {
                tracing::warn!("claim build check for {} in {} failed: {}", actor, claim.id, e);
                false
            }
        }
    }
}
