//! Per-actor session state.
//!
//! A session is created when an actor connects and dropped when they leave.
//! The host owns the [`SessionRegistry`] and passes the actor's session into
//! the engine by mutable reference for each event.

use std::collections::HashMap;

use claimguard_core::{ActorId, BlockPos, Claim, WorldId};

/// Placements allowed outside claims between two warnings.
pub const WARNING_COOLDOWN: i32 = 15;

/// Result of striking a chest for the donation handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// New chest: remembered, nothing donated yet.
    First,
    /// Same chest as the remembered one: donation confirmed.
    Repeat,
}

/// State carried across events for one connected actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSession {
    actor: ActorId,
    /// Most recently resolved claim. A lookup hint, never a source of truth.
    pub cached_last_claim: Option<Claim>,
    /// Countdown to the next "building outside claims" warning.
    pub unclaimed_placements_until_warning: i32,
    /// Chest remembered by the donation handshake.
    pub pending_chest_donation: Option<(WorldId, BlockPos)>,
    /// Last sign text written to the audit log.
    pub last_sign_text: Option<String>,
    /// Set by the siege subsystem.
    pub under_siege: bool,
}

impl ActorSession {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            cached_last_claim: None,
            unclaimed_placements_until_warning: 1,
            pending_chest_donation: None,
            last_sign_text: None,
            under_siege: false,
        }
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Re-arm the outside-claim warning after building inside a claim.
    pub fn rearm_warning(&mut self) {
        self.unclaimed_placements_until_warning = 1;
    }

    /// Count one placement outside any claim.
    ///
    /// Returns `true` when the actor should be warned now.
    pub fn count_unclaimed_placement(&mut self) -> bool {
        self.unclaimed_placements_until_warning -= 1;
        if self.unclaimed_placements_until_warning <= 0 {
            self.unclaimed_placements_until_warning = WARNING_COOLDOWN;
            return true;
        }
        false
    }

    /// Advance the donation handshake for the chest at `pos`.
    pub fn strike_chest(&mut self, world: &WorldId, pos: BlockPos) -> Strike {
        let same = self
            .pending_chest_donation
            .as_ref()
            .is_some_and(|(w, p)| w == world && *p == pos);
        if same {
            Strike::Repeat
        } else {
            self.pending_chest_donation = Some((world.clone(), pos));
            Strike::First
        }
    }
}

/// Sessions of every connected actor.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<ActorId, ActorSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `actor`, created on first use.
    pub fn connect(&mut self, actor: &ActorId) -> &mut ActorSession {
        self.sessions
            .entry(actor.clone())
            .or_insert_with(|| ActorSession::new(actor.clone()))
    }

    /// Drop the session of an actor who left.
    pub fn disconnect(&mut self, actor: &ActorId) -> Option<ActorSession> {
        self.sessions.remove(actor)
    }

    pub fn get(&self, actor: &ActorId) -> Option<&ActorSession> {
        self.sessions.get(actor)
    }

    pub fn get_mut(&mut self, actor: &ActorId) -> Option<&mut ActorSession> {
        self.sessions.get_mut(actor)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
