//! Audit trail of sign text.

use claimguard_perms::Permissions;
use claimguard_store::ClaimStore;

use crate::engine::Engine;
use crate::event::{ActorContext, SignChange};
use crate::session::ActorSession;

/// Log target for audit entries.
pub const AUDIT_TARGET: &str = "claimguard::audit";

impl<S: ClaimStore, P: Permissions> Engine<S, P> {
    /// Record sign text written by an actor.
    ///
    /// Returns the audit entry when one was logged. Blank signs and repeats
    /// of the actor's previous text are skipped.
    pub fn on_sign_change(
        &self,
        actor: &ActorContext,
        session: &mut ActorSession,
        event: &SignChange,
    ) -> Option<String> {
        if event.lines.iter().all(|line| line.is_empty()) {
            return None;
        }

        let text: String = event.lines.iter().map(|line| format!("{line};")).collect();
        if session.last_sign_text.as_deref() == Some(text.as_str()) {
            return None;
        }

        let entry = format!(
            "[Sign Placement] <{}> {} @ {} {}",
            actor.id, text, event.world, event.pos
        );
        tracing::info!(target: AUDIT_TARGET, "{}", entry);
        session.last_sign_text = Some(text);
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use claimguard_core::{ActorId, BlockPos, Vec3, WorldId};
    use claimguard_perms::TrustTable;
    use claimguard_store::MemoryClaimStore;
    use std::sync::Arc;

    fn sign(lines: &[&str]) -> SignChange {
        SignChange {
            world: WorldId::new("world"),
            pos: BlockPos::new(1, 64, 2),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_sign_audit() {
        let store = Arc::new(MemoryClaimStore::new());
        let perms = TrustTable::new(Arc::clone(&store));
        let engine = Engine::new(store, perms, EngineConfig::default()).unwrap();
        let alice = ActorContext::new(ActorId::new("alice"), Vec3::default());
        let mut session = ActorSession::new(alice.id.clone());

        assert_eq!(engine.on_sign_change(&alice, &mut session, &sign(&["", "", "", ""])), None);

        let entry = engine
            .on_sign_change(&alice, &mut session, &sign(&["for", "sale", "", ""]))
            .unwrap();
        assert_eq!(entry, "[Sign Placement] <alice> for;sale;;; @ world x:1 y:64 z:2");
        assert_eq!(session.last_sign_text.as_deref(), Some("for;sale;;;"));

        assert_eq!(
            engine.on_sign_change(&alice, &mut session, &sign(&["for", "sale", "", ""])),
            None
        );
        assert!(engine
            .on_sign_change(&alice, &mut session, &sign(&["sold", "", "", ""]))
            .is_some());
    }
}
