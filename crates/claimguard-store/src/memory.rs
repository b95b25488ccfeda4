//! In-memory implementation of the ClaimStore trait.
//!
//! A linear-scan index that is plenty for tests and for hosts with a few
//! hundred claims. Thread-safe via RwLock.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use claimguard_core::{ActorId, BlockPos, Claim, ClaimId, HeightMode, WorldId};

use crate::error::{Result, StoreError};
use crate::traits::{ClaimStore, CreateClaimResult, NewClaim};

/// In-memory claim store.
///
/// All data is lost when the store is dropped.
pub struct MemoryClaimStore {
    inner: RwLock<MemoryClaimStoreInner>,
}

struct MemoryClaimStoreInner {
    /// Claims indexed by ID, top-level and subdivisions alike.
    claims: BTreeMap<ClaimId, Claim>,

    /// Next ID to hand out.
    next_id: u64,
}

impl MemoryClaimStoreInner {
    /// Most specific stored claim containing `pos`.
    fn lookup(&self, world: &WorldId, pos: BlockPos, height: HeightMode) -> Option<&Claim> {
        let top = self
            .claims
            .values()
            .find(|c| c.parent.is_none() && c.contains(world, pos, height))?;
        self.child_containing(top.id, world, pos, height)
            .or(Some(top))
    }

    fn child_containing(
        &self,
        parent: ClaimId,
        world: &WorldId,
        pos: BlockPos,
        height: HeightMode,
    ) -> Option<&Claim> {
        self.claims
            .values()
            .find(|c| c.parent == Some(parent) && c.contains(world, pos, height))
    }

    /// First claim at the same nesting level that `candidate` would overlap.
    fn first_overlap(&self, candidate: &Claim, replacing: Option<ClaimId>) -> Option<&Claim> {
        self.claims.values().find(|c| {
            Some(c.id) != replacing && c.parent == candidate.parent && c.overlaps(candidate)
        })
    }
}

impl MemoryClaimStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryClaimStoreInner {
                claims: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every stored claim, ordered by ID.
    pub fn all_claims(&self) -> Result<Vec<Claim>> {
        Ok(self.read()?.claims.values().cloned().collect())
    }

    /// Remove a claim and its subdivisions.
    pub fn delete_claim(&self, id: ClaimId) -> Result<()> {
        let mut inner = self.write()?;
        if inner.claims.remove(&id).is_none() {
            return Err(StoreError::ClaimNotFound(id));
        }
        inner.claims.retain(|_, c| c.parent != Some(id));
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryClaimStoreInner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("claim index lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryClaimStoreInner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("claim index lock poisoned".into()))
    }
}

impl Default for MemoryClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimStore for MemoryClaimStore {
    fn claim_at(
        &self,
        world: &WorldId,
        pos: BlockPos,
        height: HeightMode,
        hint: Option<&Claim>,
    ) -> Result<Option<Claim>> {
        let inner = self.read()?;

        // Re-read the hinted claim so a stale copy is never returned.
        if let Some(hinted) = hint.and_then(|h| inner.claims.get(&h.id)) {
            if hinted.contains(world, pos, height) {
                let specific = if hinted.parent.is_none() {
                    inner.child_containing(hinted.id, world, pos, height)
                } else {
                    None
                };
                return Ok(Some(specific.unwrap_or(hinted).clone()));
            }
        }

        Ok(inner.lookup(world, pos, height).cloned())
    }

    fn claim(&self, id: ClaimId) -> Result<Option<Claim>> {
        Ok(self.read()?.claims.get(&id).cloned())
    }

    fn create_claim(&self, request: NewClaim) -> Result<CreateClaimResult> {
        let mut inner = self.write()?;

        if let Some(parent_id) = request.parent {
            let parent = inner
                .claims
                .get(&parent_id)
                .ok_or(StoreError::ClaimNotFound(parent_id))?;
            if parent.is_subdivision() {
                return Err(StoreError::SubdivisionTooDeep(parent_id));
            }
        }
        if let Some(existing) = request.replacing {
            if !inner.claims.contains_key(&existing) {
                return Err(StoreError::ClaimNotFound(existing));
            }
        }

        let id = request.replacing.unwrap_or(ClaimId(inner.next_id));
        let candidate = Claim::new(
            id,
            request.world,
            request.corner_a,
            request.corner_b,
            request.owner,
            request.parent,
        );

        if let Some(parent) = candidate.parent.and_then(|p| inner.claims.get(&p)) {
            if !parent.encloses(&candidate) {
                return Err(StoreError::InvalidBounds(format!(
                    "subdivision extends outside parent {}",
                    parent.id
                )));
            }
        }

        if let Some(existing) = inner.first_overlap(&candidate, request.replacing) {
            tracing::debug!(
                "claim request in {} overlaps {}",
                candidate.world,
                existing.id
            );
            return Ok(CreateClaimResult::Overlap {
                existing: existing.clone(),
            });
        }

        if request.replacing.is_none() {
            inner.next_id += 1;
        }
        inner.claims.insert(id, candidate.clone());
        tracing::info!(
            "stored claim {} in {} from {:?} to {:?}",
            id,
            candidate.world,
            candidate.lesser,
            candidate.greater
        );

        Ok(CreateClaimResult::Created(candidate))
    }

    fn extend_claim_downward(&self, id: ClaimId, new_floor: i32) -> Result<Claim> {
        let mut inner = self.write()?;

        let claim = inner
            .claims
            .get(&id)
            .ok_or(StoreError::ClaimNotFound(id))?;
        let top_id = claim.parent.unwrap_or(id);

        // The whole family shares the deeper floor.
        for member in inner
            .claims
            .values_mut()
            .filter(|c| c.id == top_id || c.parent == Some(top_id))
        {
            if new_floor < member.lesser.y {
                member.lesser.y = new_floor;
            }
        }

        inner
            .claims
            .get(&id)
            .cloned()
            .ok_or(StoreError::ClaimNotFound(id))
    }

    fn claim_count(&self, owner: &ActorId) -> Result<usize> {
        Ok(self
            .read()?
            .claims
            .values()
            .filter(|c| c.parent.is_none() && c.is_owned_by(owner))
            .count())
    }
}
