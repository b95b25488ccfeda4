//! ClaimStore trait: the abstract interface to the claim index.
//!
//! The engine only ever sees this trait. Implementations include the
//! in-memory index shipped here; hosts plug in their own persistent store.

use claimguard_core::{ActorId, BlockPos, Claim, ClaimId, HeightMode, Ownership, WorldId};

use crate::error::{Result, StoreError};

/// Request to create (or resize) a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub world: WorldId,
    /// Any two opposite corners; the store normalizes them.
    pub corner_a: BlockPos,
    pub corner_b: BlockPos,
    /// `None` creates an administrative claim.
    pub owner: Option<ActorId>,
    /// Create as a subdivision of this claim.
    pub parent: Option<ClaimId>,
    /// Resize this existing claim instead of creating a new one.
    pub replacing: Option<ClaimId>,
}

impl NewClaim {
    pub fn new(
        world: WorldId,
        corner_a: BlockPos,
        corner_b: BlockPos,
        owner: Option<ActorId>,
    ) -> Self {
        Self {
            world,
            corner_a,
            corner_b,
            owner,
            parent: None,
            replacing: None,
        }
    }

    /// Request from per-axis bounds, in `(x1, x2, y1, y2, z1, z2)` order.
    #[allow(clippy::too_many_arguments)]
    pub fn from_bounds(
        world: WorldId,
        x1: i32,
        x2: i32,
        y1: i32,
        y2: i32,
        z1: i32,
        z2: i32,
        owner: Option<ActorId>,
    ) -> Self {
        Self::new(
            world,
            BlockPos::new(x1, y1, z1),
            BlockPos::new(x2, y2, z2),
            owner,
        )
    }

    pub fn subdivision_of(mut self, parent: ClaimId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn replacing(mut self, existing: ClaimId) -> Self {
        self.replacing = Some(existing);
        self
    }
}

/// Result of a claim creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateClaimResult {
    /// The claim was stored.
    Created(Claim),
    /// The request overlaps an existing claim, which is returned.
    Overlap { existing: Claim },
}

impl CreateClaimResult {
    pub fn succeeded(&self) -> bool {
        matches!(self, CreateClaimResult::Created(_))
    }

    /// The created claim, or the one that blocked creation.
    pub fn claim(&self) -> &Claim {
        match self {
            CreateClaimResult::Created(claim) => claim,
            CreateClaimResult::Overlap { existing } => existing,
        }
    }
}

/// The ClaimStore trait: synchronous interface to the claim index.
///
/// All methods take `&self`; implementations that mutate use interior
/// mutability. The engine evaluates one event at a time, so implementations
/// need not be optimised for contention.
pub trait ClaimStore: Send + Sync {
    /// Most specific claim containing `pos`, if any.
    ///
    /// `hint` is a previously resolved claim that is likely to still contain
    /// `pos`; implementations may use it to skip the spatial search.
    fn claim_at(
        &self,
        world: &WorldId,
        pos: BlockPos,
        height: HeightMode,
        hint: Option<&Claim>,
    ) -> Result<Option<Claim>>;

    /// Get a claim by ID.
    fn claim(&self, id: ClaimId) -> Result<Option<Claim>>;

    /// Create a claim, rejecting it if it overlaps an existing one.
    fn create_claim(&self, request: NewClaim) -> Result<CreateClaimResult>;

    /// Lower the floor of a claim (and its family) to `new_floor`.
    ///
    /// Returns the updated claim. A floor that is not lower than the current
    /// one leaves the claim unchanged.
    fn extend_claim_downward(&self, id: ClaimId, new_floor: i32) -> Result<Claim>;

    /// Number of top-level claims owned by `owner`.
    fn claim_count(&self, owner: &ActorId) -> Result<usize>;
}

/// Extension trait for common lookup patterns.
pub trait ClaimStoreExt: ClaimStore {
    /// Ownership of the claim at `pos`, honouring the claim floor.
    ///
    /// Subdivisions report the owner of their top-level claim.
    fn ownership_at(&self, world: &WorldId, pos: BlockPos) -> Result<Ownership> {
        match self.claim_at(world, pos, HeightMode::Respect, None)? {
            Some(claim) => Ok(self.top_level(claim)?.ownership()),
            None => Ok(Ownership::Unclaimed),
        }
    }

    /// The top-level claim for `claim`: itself, or its parent.
    ///
    /// Nesting is capped at one level; a parent that is itself a subdivision
    /// is reported as [`StoreError::SubdivisionTooDeep`].
    fn top_level(&self, claim: Claim) -> Result<Claim> {
        let Some(parent_id) = claim.parent else {
            return Ok(claim);
        };
        let parent = self
            .claim(parent_id)?
            .ok_or(StoreError::ClaimNotFound(parent_id))?;
        if parent.is_subdivision() {
            return Err(StoreError::SubdivisionTooDeep(claim.id));
        }
        Ok(parent)
    }
}

impl<S: ClaimStore + ?Sized> ClaimStoreExt for S {}

impl<S: ClaimStore + ?Sized> ClaimStore for std::sync::Arc<S> {
    fn claim_at(
        &self,
        world: &WorldId,
        pos: BlockPos,
        height: HeightMode,
        hint: Option<&Claim>,
    ) -> Result<Option<Claim>> {
        (**self).claim_at(world, pos, height, hint)
    }

    fn claim(&self, id: ClaimId) -> Result<Option<Claim>> {
        (**self).claim(id)
    }

    fn create_claim(&self, request: NewClaim) -> Result<CreateClaimResult> {
        (**self).create_claim(request)
    }

    fn extend_claim_downward(&self, id: ClaimId, new_floor: i32) -> Result<Claim> {
        (**self).extend_claim_downward(id, new_floor)
    }

    fn claim_count(&self, owner: &ActorId) -> Result<usize> {
        (**self).claim_count(owner)
    }
}
