//! Mutation-attempt notifications delivered by the host.
//!
//! One struct per event category. The host fills them in from its own event
//! objects and hands them to the matching [`crate::Engine`] method.

use claimguard_core::{ActorId, BlockPos, Direction, GameMode, Material, Vec3, WorldId};
use serde::{Deserialize, Serialize};

/// The actor behind an actor-initiated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorContext {
    pub id: ActorId,
    pub game_mode: GameMode,
    pub location: Vec3,
    /// Holds the permission to place fire next to other actors.
    pub may_ignite_near_actors: bool,
}

impl ActorContext {
    pub fn new(id: ActorId, location: Vec3) -> Self {
        Self {
            id,
            game_mode: GameMode::Survival,
            location,
            may_ignite_near_actors: false,
        }
    }
}

/// Another actor present in the same world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentActor {
    pub id: ActorId,
    pub location: Vec3,
}

/// World state consulted by the fire-proximity rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldView {
    pub pvp: bool,
    /// Every actor currently in the world, the placing actor included.
    pub actors: Vec<PresentActor>,
}

/// The block a placed block was set against, and what lies beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub against: Material,
    /// One block below `against`.
    pub below: Material,
    /// Two blocks below `against`.
    pub below_two: Material,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockBreak {
    pub world: WorldId,
    pub pos: BlockPos,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPlace {
    pub world: WorldId,
    pub pos: BlockPos,
    pub material: Material,
    pub support: Option<Support>,
}

/// A piston about to push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PistonExtend {
    pub world: WorldId,
    pub piston: BlockPos,
    pub piston_material: Material,
    pub direction: Direction,
    /// Blocks about to move, at their current coordinates.
    pub moving: Vec<BlockPos>,
}

/// A piston about to retract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PistonRetract {
    pub world: WorldId,
    pub piston: BlockPos,
    pub sticky: bool,
    /// Coordinate of the block a sticky piston would pull.
    pub retract_from: BlockPos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispense {
    pub world: WorldId,
    pub dispenser: BlockPos,
    pub item: Material,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgniteCause {
    FlintAndSteel,
    Lava,
    Spread,
    Lightning,
    Fireball,
    Explosion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ignite {
    pub world: WorldId,
    pub pos: BlockPos,
    pub cause: IgniteCause,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    pub world: WorldId,
    pub pos: BlockPos,
    /// Material of the spreading block.
    pub source: Material,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burn {
    pub world: WorldId,
    pub pos: BlockPos,
}

/// A tree or mushroom about to grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureGrow {
    pub world: WorldId,
    pub root: BlockPos,
    pub blocks: Vec<BlockPos>,
}

/// An actor striking a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDamage {
    pub world: WorldId,
    pub pos: BlockPos,
    pub block: Material,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignChange {
    pub world: WorldId,
    pub pos: BlockPos,
    pub lines: Vec<String>,
}

/// Water or lava about to flow one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidFlow {
    pub world: WorldId,
    pub from: BlockPos,
    pub to: BlockPos,
}

/// Events with no acting player, evaluated through [`crate::Engine::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnvironmentEvent {
    PistonExtend(PistonExtend),
    PistonRetract(PistonRetract),
    Dispense(Dispense),
    Ignite(Ignite),
    Spread(Spread),
    Burn(Burn),
    FluidFlow(FluidFlow),
}

impl EnvironmentEvent {
    pub fn kind(&self) -> MutationKind {
        match self {
            EnvironmentEvent::PistonExtend(_) => MutationKind::PistonExtend,
            EnvironmentEvent::PistonRetract(_) => MutationKind::PistonRetract,
            EnvironmentEvent::Dispense(_) => MutationKind::Dispense,
            EnvironmentEvent::Ignite(_) => MutationKind::Ignite,
            EnvironmentEvent::Spread(_) => MutationKind::Spread,
            EnvironmentEvent::Burn(_) => MutationKind::Burn,
            EnvironmentEvent::FluidFlow(_) => MutationKind::FluidFlow,
        }
    }
}

/// Every mutation category the engine has a rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    BlockBreak,
    BlockPlace,
    PistonExtend,
    PistonRetract,
    Dispense,
    Ignite,
    Spread,
    Burn,
    StructureGrow,
    BlockDamage,
    SignChange,
    FluidFlow,
}

/// Order in which host listeners run; `Lowest` runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventPriority {
    Lowest,
    Normal,
    High,
}

impl MutationKind {
    /// Priority the host should register this category's rule at.
    ///
    /// Restriction rules that may cancel run before rules whose side effects
    /// assume the event proceeds. Placement runs late so that other
    /// listeners' cancellations are already visible.
    pub fn priority(self) -> EventPriority {
        match self {
            MutationKind::BlockBreak
            | MutationKind::PistonExtend
            | MutationKind::PistonRetract
            | MutationKind::Dispense
            | MutationKind::Ignite
            | MutationKind::Spread
            | MutationKind::Burn
            | MutationKind::FluidFlow => EventPriority::Lowest,
            MutationKind::StructureGrow | MutationKind::BlockDamage | MutationKind::SignChange => {
                EventPriority::Normal
            }
            MutationKind::BlockPlace => EventPriority::High,
        }
    }

    /// Whether the rule should be skipped for events another listener has
    /// already cancelled. Fire rules always run.
    pub fn skips_cancelled(self) -> bool {
        !matches!(
            self,
            MutationKind::Ignite | MutationKind::Spread | MutationKind::Burn
        )
    }
}
