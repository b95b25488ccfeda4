//! Water and lava flowing over a claim edge.

use claimguard_perms::Permissions;
use claimguard_store::{ClaimStore, ClaimStoreExt};

use crate::engine::Engine;
use crate::error::Result;
use crate::event::{FluidFlow, MutationKind};
use crate::outcome::Outcome;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    pub fn on_fluid_flow(&self, event: &FluidFlow) -> Outcome {
        let result = self.evaluate_fluid_flow(event);
        self.settle(MutationKind::FluidFlow, result)
    }

    /// Flow within one owner's land is free. Flow between two claims is
    /// allowed when the destination trusts the source claim's owner to
    /// build. Anything else crossing an edge is stopped.
    fn evaluate_fluid_flow(&self, event: &FluidFlow) -> Result<Outcome> {
        let resolver = self.resolver(&event.world);
        let from = resolver.resolve(event.from, None)?;
        let to = resolver.resolve(event.to, from.as_ref())?;

        let (source, target) = match (from, to) {
            (None, None) => return Ok(Outcome::allow()),
            (Some(source), Some(target)) => (self.store.top_level(source)?, target),
            _ => return Ok(Outcome::deny()),
        };
        let target_top = self.store.top_level(target.clone())?;
        if source.ownership() == target_top.ownership() {
            return Ok(Outcome::allow());
        }

        if let Some(owner) = &source.owner {
            if self.may_build_in(&target, owner) {
                return Ok(Outcome::allow());
            }
        }
        Ok(Outcome::deny())
    }
}
