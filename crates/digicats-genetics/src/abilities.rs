//! Fusion ability catalog.

use serde::Serialize;

/// Power tier of a fusion ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AbilityTier {
    Epic,
    Legendary,
}

/// A named ability a fusion result can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FusionAbility {
    pub name: &'static str,
    pub description: &'static str,
    pub tier: AbilityTier,
}

/// The fixed ability catalog fusions draw from, without replacement.
pub const FUSION_ABILITIES: [FusionAbility; 6] = [
    FusionAbility {
        name: "Cosmic Fury",
        description: "Deal 2x damage on critical hits",
        tier: AbilityTier::Legendary,
    },
    FusionAbility {
        name: "Soul Link",
        description: "Share 25% of damage with opponent",
        tier: AbilityTier::Legendary,
    },
    FusionAbility {
        name: "Astral Form",
        description: "30% chance to dodge any attack",
        tier: AbilityTier::Legendary,
    },
    FusionAbility {
        name: "Eternal Flame",
        description: "Burn enemies for 5% HP per turn",
        tier: AbilityTier::Epic,
    },
    FusionAbility {
        name: "Thunder Strike",
        description: "Stun opponent for 1 turn on hit",
        tier: AbilityTier::Epic,
    },
    FusionAbility {
        name: "Phoenix Rebirth",
        description: "Revive once with 50% HP",
        tier: AbilityTier::Legendary,
    },
];
