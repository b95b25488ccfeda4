//! Ignition, spread and burning.

use claimguard_core::Material;
use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::error::Result;
use crate::event::{Burn, Ignite, IgniteCause, MutationKind, Spread};
use crate::outcome::Outcome;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// Only flint and steel may start a fire unless fire spread is enabled.
    pub fn on_ignite(&self, event: &Ignite) -> Outcome {
        if event.cause != IgniteCause::FlintAndSteel && !self.config.fire_spreads {
            tracing::debug!("{:?} ignition at {} suppressed", event.cause, event.pos);
            return Outcome::deny();
        }
        Outcome::allow()
    }

    pub fn on_spread(&self, event: &Spread) -> Outcome {
        if event.source == Material::Fire && !self.config.fire_spreads {
            return Outcome::deny();
        }
        Outcome::allow()
    }

    /// Burning is refused everywhere unless enabled, and always inside claims.
    pub fn on_burn(&self, event: &Burn) -> Outcome {
        let result = self.evaluate_burn(event);
        self.settle(MutationKind::Burn, result)
    }

    fn evaluate_burn(&self, event: &Burn) -> Result<Outcome> {
        if !self.config.fire_destroys {
            return Ok(Outcome::deny());
        }
        if self.resolver(&event.world).resolve(event.pos, None)?.is_some() {
            return Ok(Outcome::deny());
        }
        Ok(Outcome::allow())
    }
}
