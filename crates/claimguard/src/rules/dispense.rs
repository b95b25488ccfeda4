//! Dispensers firing across claim boundaries.

use claimguard_core::Direction;
use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::error::Result;
use crate::event::{Dispense, MutationKind};
use crate::outcome::Outcome;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    pub fn on_dispense(&self, event: &Dispense) -> Outcome {
        let result = self.evaluate_dispense(event);
        self.settle(MutationKind::Dispense, result)
    }

    fn evaluate_dispense(&self, event: &Dispense) -> Result<Outcome> {
        let resolver = self.resolver(&event.world);
        let target = event
            .dispenser
            .relative(Direction::dominant_horizontal(event.velocity));

        let from = resolver.resolve(event.dispenser, None)?;
        let to = resolver.resolve(target, from.as_ref())?;

        if to.is_none()
            && event.item.is_fluid_bucket()
            && self.config.block_wilderness_water_buckets
        {
            return Ok(Outcome::deny());
        }

        let allowed = match (&from, &to) {
            (None, None) => true,
            (Some(a), Some(b)) => a.id == b.id,
            _ => false,
        };
        if allowed {
            Ok(Outcome::allow())
        } else {
            tracing::debug!("dispenser at {} fires into {} across a claim edge", event.dispenser, target);
            Ok(Outcome::deny())
        }
    }
}
