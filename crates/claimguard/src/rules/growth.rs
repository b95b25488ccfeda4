//! Trees and mushrooms growing into someone else's claim.

use claimguard_core::Ownership;
use claimguard_perms::Permissions;
use claimguard_store::{ClaimStore, ClaimStoreExt};

use crate::engine::Engine;
use crate::error::Result;
use crate::event::StructureGrow;
use crate::outcome::GrowthOutcome;

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// Split a growing structure into the blocks that may appear and the
    /// blocks the host must drop.
    ///
    /// The structure belongs to whoever owns the claim its root sits in,
    /// judged at the top-level claim. Growth rooted in an administrative
    /// claim is unrestricted. When the store cannot answer, every block is
    /// vetoed.
    pub fn on_structure_grow(&self, event: &StructureGrow) -> GrowthOutcome {
        match self.evaluate_growth(event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("growth at {} in {} vetoed: {}", event.root, event.world, e);
                GrowthOutcome::veto_all(event.blocks.clone())
            }
        }
    }

    fn evaluate_growth(&self, event: &StructureGrow) -> Result<GrowthOutcome> {
        let resolver = self.resolver(&event.world);
        let root_owner = match resolver.resolve(event.root, None)? {
            Some(claim) => self.store.top_level(claim)?.ownership(),
            None => Ownership::Unclaimed,
        };
        if root_owner == Ownership::Admin {
            return Ok(GrowthOutcome::unrestricted(event.blocks.clone()));
        }

        let mut outcome = GrowthOutcome::default();
        for &pos in &event.blocks {
            let owner = resolver.ownership(pos)?;
            if owner.is_claimed() && owner != root_owner {
                outcome.vetoed.push(pos);
            } else {
                outcome.kept.push(pos);
            }
        }
        if !outcome.vetoed.is_empty() {
            tracing::debug!(
                "{} of {} blocks grown from {} vetoed",
                outcome.vetoed.len(),
                event.blocks.len(),
                event.root
            );
        }
        Ok(outcome)
    }
}
