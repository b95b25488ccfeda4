//! Per-claim trust tables.
//!
//! Owners grant trust levels to other actors claim by claim. Grants on a
//! top-level claim cover its subdivisions unless the subdivision has grants
//! of its own for that actor.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use claimguard_core::{ActorId, BlockPos, Claim, ClaimId, HeightMode, WorldId};
use claimguard_store::ClaimStore;
use serde::{Deserialize, Serialize};

use crate::error::{PermsError, Result};
use crate::traits::{Denial, Permissions};

/// What a grant lets the recipient do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrustLevel {
    /// Open chests and other containers.
    Container,
    /// Place and break blocks. Implies container access.
    Build,
}

/// Grants recorded against one claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimTrust {
    grants: HashMap<ActorId, TrustLevel>,
    /// Level granted to everyone.
    public: Option<TrustLevel>,
}

impl ClaimTrust {
    /// Level held by `actor`, the higher of their own grant and the public one.
    pub fn level_of(&self, actor: &ActorId) -> Option<TrustLevel> {
        self.grants.get(actor).copied().max(self.public)
    }
}

#[derive(Debug, Default)]
struct TrustState {
    claims: HashMap<ClaimId, ClaimTrust>,
    /// Actors that ignore claims entirely.
    administrators: HashSet<ActorId>,
}

/// Reference [`Permissions`] implementation backed by a claim store.
pub struct TrustTable<S: ClaimStore> {
    store: S,
    state: RwLock<TrustState>,
}

impl<S: ClaimStore> TrustTable<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: RwLock::new(TrustState::default()),
        }
    }

    /// Grant `level` in `claim` to `actor`, replacing any previous grant.
    pub fn grant(&self, claim: ClaimId, actor: ActorId, level: TrustLevel) -> Result<()> {
        self.write()?
            .claims
            .entry(claim)
            .or_default()
            .grants
            .insert(actor, level);
        Ok(())
    }

    /// Grant `level` in `claim` to everyone.
    pub fn grant_public(&self, claim: ClaimId, level: TrustLevel) -> Result<()> {
        self.write()?.claims.entry(claim).or_default().public = Some(level);
        Ok(())
    }

    /// Remove every grant `actor` holds in `claim`.
    pub fn revoke(&self, claim: ClaimId, actor: &ActorId) -> Result<()> {
        if let Some(trust) = self.write()?.claims.get_mut(&claim) {
            trust.grants.remove(actor);
        }
        Ok(())
    }

    /// Let `actor` ignore claims everywhere.
    pub fn add_administrator(&self, actor: ActorId) -> Result<()> {
        self.write()?.administrators.insert(actor);
        Ok(())
    }

    /// Effective trust of `actor` in `claim`, falling back to the parent.
    pub fn level_in(&self, claim: &Claim, actor: &ActorId) -> Result<Option<TrustLevel>> {
        let state = self.read()?;
        let own = state.claims.get(&claim.id).and_then(|t| t.level_of(actor));
        if own.is_some() {
            return Ok(own);
        }
        Ok(claim
            .parent
            .and_then(|p| state.claims.get(&p))
            .and_then(|t| t.level_of(actor)))
    }

    fn is_exempt(&self, claim: &Claim, actor: &ActorId) -> Result<bool> {
        if self.read()?.administrators.contains(actor) {
            return Ok(true);
        }
        if claim.is_owned_by(actor) {
            return Ok(true);
        }
        // Owners of the enclosing claim control its subdivisions.
        if let Some(parent) = claim.parent {
            if let Some(parent) = self.store.claim(parent)? {
                return Ok(parent.is_owned_by(actor));
            }
        }
        Ok(false)
    }

    fn owner_label(claim: &Claim) -> String {
        match &claim.owner {
            Some(owner) => owner.to_string(),
            None => "an administrator".to_string(),
        }
    }

    fn claim_for(&self, world: &WorldId, pos: BlockPos) -> Result<Option<Claim>> {
        Ok(self.store.claim_at(world, pos, HeightMode::Respect, None)?)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TrustState>> {
        self.state
            .read()
            .map_err(|_| PermsError::Unavailable("trust table lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TrustState>> {
        self.state
            .write()
            .map_err(|_| PermsError::Unavailable("trust table lock poisoned".into()))
    }
}

impl<S: ClaimStore> Permissions for TrustTable<S> {
    fn allow_build(
        &self,
        actor: &ActorId,
        world: &WorldId,
        pos: BlockPos,
    ) -> Result<Option<Denial>> {
        match self.claim_for(world, pos)? {
            Some(claim) => self.allow_claim_build(&claim, actor),
            None => Ok(None),
        }
    }

    fn allow_break(
        &self,
        actor: &ActorId,
        world: &WorldId,
        pos: BlockPos,
    ) -> Result<Option<Denial>> {
        match self.claim_for(world, pos)? {
            Some(claim) => {
                if self.allow_claim_build(&claim, actor)?.is_none() {
                    return Ok(None);
                }
                Ok(Some(Denial::new(format!(
                    "You don't have {}'s permission to break blocks here.",
                    Self::owner_label(&claim)
                ))))
            }
            None => Ok(None),
        }
    }

    fn allow_container_access(&self, claim: &Claim, actor: &ActorId) -> Result<Option<Denial>> {
        if self.is_exempt(claim, actor)? || self.level_in(claim, actor)?.is_some() {
            return Ok(None);
        }
        Ok(Some(Denial::new(format!(
            "You don't have {}'s permission to use that.",
            Self::owner_label(claim)
        ))))
    }

    fn allow_claim_build(&self, claim: &Claim, actor: &ActorId) -> Result<Option<Denial>> {
        if self.is_exempt(claim, actor)? || self.level_in(claim, actor)? == Some(TrustLevel::Build)
        {
            return Ok(None);
        }
        Ok(Some(Denial::new(format!(
            "You don't have {}'s permission to build here.",
            Self::owner_label(claim)
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimguard_store::{MemoryClaimStore, NewClaim};
    use std::sync::Arc;

    struct Setup {
        store: Arc<MemoryClaimStore>,
        table: TrustTable<Arc<MemoryClaimStore>>,
        claim: Claim,
    }

    fn setup() -> Setup {
        let store = Arc::new(MemoryClaimStore::new());
        let claim = store
            .create_claim(NewClaim::from_bounds(
                world(),
                0,
                20,
                60,
                64,
                0,
                20,
                Some(ActorId::new("alice")),
            ))
            .unwrap()
            .claim()
            .clone();
        let table = TrustTable::new(Arc::clone(&store));
        Setup {
            store,
            table,
            claim,
        }
    }

    fn world() -> WorldId {
        WorldId::new("world")
    }

    fn bob() -> ActorId {
        ActorId::new("bob")
    }

    #[test]
    fn test_owner_may_build() {
        let s = setup();
        let alice = ActorId::new("alice");
        assert!(s
            .table
            .allow_build(&alice, &world(), BlockPos::new(1, 64, 1))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_stranger_denied_with_reason() {
        let s = setup();
        let denial = s
            .table
            .allow_build(&bob(), &world(), BlockPos::new(1, 64, 1))
            .unwrap()
            .unwrap();
        assert!(denial.reason.contains("alice"));
        assert!(s
            .table
            .allow_break(&bob(), &world(), BlockPos::new(1, 64, 1))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_wilderness_is_open() {
        let s = setup();
        assert!(s
            .table
            .allow_build(&bob(), &world(), BlockPos::new(100, 64, 100))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_build_trust_implies_containers() {
        let s = setup();
        s.table.grant(s.claim.id, bob(), TrustLevel::Build).unwrap();
        assert!(s.table.allow_claim_build(&s.claim, &bob()).unwrap().is_none());
        assert!(s
            .table
            .allow_container_access(&s.claim, &bob())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_container_trust_does_not_allow_build() {
        let s = setup();
        s.table
            .grant(s.claim.id, bob(), TrustLevel::Container)
            .unwrap();
        assert!(s.table.allow_claim_build(&s.claim, &bob()).unwrap().is_some());
        assert!(s
            .table
            .allow_container_access(&s.claim, &bob())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_revoke_removes_access() {
        let s = setup();
        s.table.grant(s.claim.id, bob(), TrustLevel::Build).unwrap();
        s.table.revoke(s.claim.id, &bob()).unwrap();
        assert!(s.table.allow_claim_build(&s.claim, &bob()).unwrap().is_some());
    }

    #[test]
    fn test_public_grant() {
        let s = setup();
        s.table
            .grant_public(s.claim.id, TrustLevel::Container)
            .unwrap();
        assert!(s
            .table
            .allow_container_access(&s.claim, &ActorId::new("anyone"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_subdivision_inherits_parent_grants() {
        let s = setup();
        let child = s
            .store
            .create_claim(
                NewClaim::from_bounds(world(), 2, 5, 60, 64, 2, 5, Some(ActorId::new("alice")))
                    .subdivision_of(s.claim.id),
            )
            .unwrap()
            .claim()
            .clone();

        s.table.grant(s.claim.id, bob(), TrustLevel::Build).unwrap();
        assert!(s.table.allow_claim_build(&child, &bob()).unwrap().is_none());
    }

    #[test]
    fn test_admin_claim_denies_everyone_but_administrators() {
        let s = setup();
        let admin_claim = s
            .store
            .create_claim(NewClaim::from_bounds(world(), 50, 60, 60, 64, 50, 60, None))
            .unwrap()
            .claim()
            .clone();
        let carol = ActorId::new("carol");

        let denial = s.table.allow_claim_build(&admin_claim, &carol).unwrap();
        assert!(denial.unwrap().reason.contains("an administrator"));

        s.table.add_administrator(carol.clone()).unwrap();
        assert!(s.table.allow_claim_build(&admin_claim, &carol).unwrap().is_none());
    }
}
