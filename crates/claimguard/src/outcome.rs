//! What the engine hands back to the host for one event.

use claimguard_core::{ActorId, BlockPos, Claim, ItemStack, Material};
use serde::{Deserialize, Serialize};

/// The verdict on a mutation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Let the mutation happen.
    Allow,
    /// Cancel the mutation.
    Deny,
    /// Cancel the mutation and apply these world changes, in order.
    DenyAndCompensate(Vec<Compensation>),
}

/// A corrective world mutation the host must perform after cancelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Compensation {
    /// Cosmetic explosion; `power` 0 destroys nothing.
    Explosion { at: BlockPos, power: f32 },
    /// Drop a loose item.
    DropItem { at: BlockPos, stack: ItemStack },
    /// Replace the block at `at`.
    SetBlock { at: BlockPos, material: Material },
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Error,
    Warning,
    Instruction,
    Success,
}

/// User-facing message. Text lives with the host's localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKey {
    /// A permission refusal with the collaborator's reason.
    Denied(String),
    /// Protection data was unavailable, so the action was refused.
    ProtectionUnavailable,
    PlayerTooCloseForFire { other: ActorId },
    TooDeepToClaim,
    ChestClaimConfirmation,
    AutomaticClaimNotification,
    TrustCommandAdvertisement,
    GoldenShovelAdvertisement,
    UnprotectedChestWarning,
    BuildingOutsideClaims,
    SiegeNoDrop,
    DonateItemsInstruction,
    ChestFull,
    DonationSuccess,
}

impl MessageKey {
    pub fn tone(&self) -> Tone {
        match self {
            MessageKey::Denied(_)
            | MessageKey::ProtectionUnavailable
            | MessageKey::PlayerTooCloseForFire { .. }
            | MessageKey::SiegeNoDrop
            | MessageKey::ChestFull => Tone::Error,
            MessageKey::TooDeepToClaim
            | MessageKey::UnprotectedChestWarning
            | MessageKey::BuildingOutsideClaims => Tone::Warning,
            MessageKey::TrustCommandAdvertisement
            | MessageKey::GoldenShovelAdvertisement
            | MessageKey::DonateItemsInstruction => Tone::Instruction,
            MessageKey::ChestClaimConfirmation
            | MessageKey::AutomaticClaimNotification
            | MessageKey::DonationSuccess => Tone::Success,
        }
    }
}

/// Side output for the acting player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feedback {
    Message(MessageKey),
    /// Show the boundary of `claim` around height `height`.
    Visualize { claim: Claim, height: i32 },
}

/// Decision plus feedback for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub decision: Decision,
    pub feedback: Vec<Feedback>,
}

impl Outcome {
    pub fn allow() -> Self {
        Self {
            decision: Decision::Allow,
            feedback: Vec::new(),
        }
    }

    pub fn deny() -> Self {
        Self {
            decision: Decision::Deny,
            feedback: Vec::new(),
        }
    }

    pub fn deny_with(message: MessageKey) -> Self {
        Self::deny().with(message)
    }

    pub fn compensate(actions: Vec<Compensation>) -> Self {
        Self {
            decision: Decision::DenyAndCompensate(actions),
            feedback: Vec::new(),
        }
    }

    /// Append a message.
    pub fn with(mut self, message: MessageKey) -> Self {
        self.notify(message);
        self
    }

    pub fn notify(&mut self, message: MessageKey) {
        self.feedback.push(Feedback::Message(message));
    }

    pub fn visualize(&mut self, claim: Claim, height: i32) {
        self.feedback.push(Feedback::Visualize { claim, height });
    }

    /// Whether the host must cancel the mutation.
    pub fn is_cancelled(&self) -> bool {
        !matches!(self.decision, Decision::Allow)
    }

    pub fn compensation(&self) -> &[Compensation] {
        match &self.decision {
            Decision::DenyAndCompensate(actions) => actions,
            _ => &[],
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &MessageKey> {
        self.feedback.iter().filter_map(|f| match f {
            Feedback::Message(key) => Some(key),
            Feedback::Visualize { .. } => None,
        })
    }

    pub fn has_message(&self, key: &MessageKey) -> bool {
        self.messages().any(|m| m == key)
    }

    pub fn visualizations(&self) -> impl Iterator<Item = &Claim> {
        self.feedback.iter().filter_map(|f| match f {
            Feedback::Visualize { claim, .. } => Some(claim),
            Feedback::Message(_) => None,
        })
    }
}

/// Result of filtering a growing structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthOutcome {
    /// Blocks that may be placed, in their original order.
    pub kept: Vec<BlockPos>,
    /// Blocks the host must drop from the structure.
    pub vetoed: Vec<BlockPos>,
}

impl GrowthOutcome {
    pub fn unrestricted(blocks: Vec<BlockPos>) -> Self {
        Self {
            kept: blocks,
            vetoed: Vec::new(),
        }
    }

    pub fn veto_all(blocks: Vec<BlockPos>) -> Self {
        Self {
            kept: Vec::new(),
            vetoed: blocks,
        }
    }
}
