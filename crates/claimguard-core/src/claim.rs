//! Claims and owner identity.

use serde::{Deserialize, Serialize};

use crate::geometry::BlockPos;
use crate::types::{ActorId, ClaimId, WorldId};

/// Whether a point lookup honours the claim floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightMode {
    /// A coordinate below the claim floor is outside the claim.
    Respect,
    /// Only the horizontal footprint matters.
    Ignore,
}

/// Who owns a coordinate.
///
/// Replaces the "empty string" / `"_"` owner sentinels: an unclaimed
/// coordinate can never compare equal to a player who happens to share a
/// sentinel's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    Unclaimed,
    Admin,
    Player(ActorId),
}

impl Ownership {
    pub fn is_claimed(&self) -> bool {
        !matches!(self, Ownership::Unclaimed)
    }
}

/// An owned, axis-aligned region of a world.
///
/// `lesser` and `greater` are inclusive corners. The floor is `lesser.y`;
/// protection extends upward without limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub world: WorldId,
    pub lesser: BlockPos,
    pub greater: BlockPos,
    /// `None` for administrative claims.
    pub owner: Option<ActorId>,
    /// Enclosing claim when this is a subdivision.
    pub parent: Option<ClaimId>,
}

impl Claim {
    /// Build a claim from any two opposite corners.
    pub fn new(
        id: ClaimId,
        world: WorldId,
        a: BlockPos,
        b: BlockPos,
        owner: Option<ActorId>,
        parent: Option<ClaimId>,
    ) -> Self {
        Self {
            id,
            world,
            lesser: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            greater: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
            owner,
            parent,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_subdivision(&self) -> bool {
        self.parent.is_some()
    }

    pub fn ownership(&self) -> Ownership {
        match &self.owner {
            Some(actor) => Ownership::Player(actor.clone()),
            None => Ownership::Admin,
        }
    }

    pub fn is_owned_by(&self, actor: &ActorId) -> bool {
        self.owner.as_ref() == Some(actor)
    }

    pub fn floor(&self) -> i32 {
        self.lesser.y
    }

    /// Whether `pos` in `world` lies inside this claim.
    pub fn contains(&self, world: &WorldId, pos: BlockPos, height: HeightMode) -> bool {
        if &self.world != world {
            return false;
        }
        let horizontal = pos.x >= self.lesser.x
            && pos.x <= self.greater.x
            && pos.z >= self.lesser.z
            && pos.z <= self.greater.z;
        match height {
            HeightMode::Ignore => horizontal,
            HeightMode::Respect => horizontal && pos.y >= self.lesser.y,
        }
    }

    /// Whether the horizontal footprints of two claims in the same world
    /// intersect.
    pub fn overlaps(&self, other: &Claim) -> bool {
        self.world == other.world
            && self.lesser.x <= other.greater.x
            && other.lesser.x <= self.greater.x
            && self.lesser.z <= other.greater.z
            && other.lesser.z <= self.greater.z
    }

    /// Whether `other`'s footprint lies entirely within this one.
    pub fn encloses(&self, other: &Claim) -> bool {
        self.world == other.world
            && other.lesser.x >= self.lesser.x
            && other.greater.x <= self.greater.x
            && other.lesser.z >= self.lesser.z
            && other.greater.z <= self.greater.z
    }
}
