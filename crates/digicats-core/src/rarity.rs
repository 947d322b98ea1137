//! Rarity tiers and the stat-sum classifier.

use serde::{Deserialize, Serialize};

use crate::constants::{EPIC_STAT_TOTAL, RARE_STAT_TOTAL, UNCOMMON_STAT_TOTAL};

/// Ordered rarity classification. Legendary is a strict superlative tier:
/// it is never reached by stat total alone, only via the special flag,
/// a breeding rarity roll, or fusion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RarityTier {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl RarityTier {
    /// All tiers in ascending order.
    pub const ALL: [RarityTier; 5] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Legendary,
    ];

    /// Numeric tier index (Common = 0 .. Legendary = 4).
    pub fn index(self) -> u8 {
        match self {
            RarityTier::Common => 0,
            RarityTier::Uncommon => 1,
            RarityTier::Rare => 2,
            RarityTier::Epic => 3,
            RarityTier::Legendary => 4,
        }
    }

    /// Tier from a numeric index, saturating at Legendary.
    pub fn from_index(index: u8) -> RarityTier {
        match index {
            0 => RarityTier::Common,
            1 => RarityTier::Uncommon,
            2 => RarityTier::Rare,
            3 => RarityTier::Epic,
            _ => RarityTier::Legendary,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
        }
    }
}

/// Classify rarity from combat stats and the special flag.
///
/// The special flag always forces Legendary; otherwise the tier is a
/// pure function of the stat total. Monotonic in the total.
pub fn classify_rarity(strength: u8, agility: u8, intelligence: u8, is_special: bool) -> RarityTier {
    if is_special {
        return RarityTier::Legendary;
    }
    let total = strength as u16 + agility as u16 + intelligence as u16;
    if total > EPIC_STAT_TOTAL {
        RarityTier::Epic
    } else if total > RARE_STAT_TOTAL {
        RarityTier::Rare
    } else if total > UNCOMMON_STAT_TOTAL {
        RarityTier::Uncommon
    } else {
        RarityTier::Common
    }
}
