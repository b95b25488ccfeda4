//! Piston push and pull consistency.

use claimguard_core::{ItemStack, Material, Ownership};
use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::error::Result;
use crate::event::{MutationKind, PistonExtend, PistonRetract};
use crate::outcome::{Compensation, Outcome};

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    pub fn on_piston_extend(&self, event: &PistonExtend) -> Outcome {
        let result = self.evaluate_piston_extend(event);
        self.settle(MutationKind::PistonExtend, result)
    }

    pub fn on_piston_retract(&self, event: &PistonRetract) -> Outcome {
        let result = self.evaluate_piston_retract(event);
        self.settle(MutationKind::PistonRetract, result)
    }

    fn evaluate_piston_extend(&self, event: &PistonExtend) -> Result<Outcome> {
        let resolver = self.resolver(&event.world);
        let piston_owner = resolver.ownership(event.piston)?;

        if event.moving.is_empty() {
            let face = event.piston.relative(event.direction);
            if piston_owner == Ownership::Unclaimed && resolver.ownership(face)?.is_claimed() {
                return Ok(Outcome::deny());
            }
            return Ok(Outcome::allow());
        }

        for &pos in &event.moving {
            let owner = resolver.ownership(pos)?;
            if owner.is_claimed() && owner != piston_owner {
                return Ok(self.break_piston(event));
            }
        }

        if event.direction.is_horizontal() {
            for &pos in &event.moving {
                if resolver.crosses_boundary(pos, pos.relative(event.direction))? {
                    return Ok(self.break_piston(event));
                }
            }
        }

        Ok(Outcome::allow())
    }

    fn evaluate_piston_retract(&self, event: &PistonRetract) -> Result<Outcome> {
        if !event.sticky {
            return Ok(Outcome::allow());
        }
        let resolver = self.resolver(&event.world);
        if resolver.ownership(event.retract_from)? != resolver.ownership(event.piston)? {
            return Ok(Outcome::deny());
        }
        Ok(Outcome::allow())
    }

    /// Cancel the push and pop the piston so it cannot be fired again.
    fn break_piston(&self, event: &PistonExtend) -> Outcome {
        tracing::warn!(
            "piston at {} in {} pushed across a claim boundary; breaking it",
            event.piston,
            event.world
        );
        Outcome::compensate(vec![
            Compensation::Explosion {
                at: event.piston,
                power: 0.0,
            },
            Compensation::DropItem {
                at: event.piston,
                stack: ItemStack::one(event.piston_material.clone()),
            },
            Compensation::SetBlock {
                at: event.piston,
                material: Material::Air,
            },
        ])
    }
}
