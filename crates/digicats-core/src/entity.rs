//! The cat entity model — the unit of play.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::EntityError;
use crate::rarity::{classify_rarity, RarityTier};

/// Unique cat identifier. Zero is the founder-parent sentinel and is
/// never assigned to a live cat.
pub type CatId = u64;

/// A cat: cosmetic traits, combat stats, lineage, and rarity.
///
/// Cats are immutable once created. The engines treat them as read-only
/// inputs; new cats come out of breeding, fusion, or a roster source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub id: CatId,
    /// Generation number; 0 = genesis founder.
    pub generation: u32,
    /// Creation time (milliseconds).
    pub birth_time_ms: u64,
    /// Last breeding time (milliseconds); 0 = never bred.
    pub last_breed_time_ms: u64,
    /// Parent ids; both 0 for founders.
    pub matron_id: CatId,
    pub sire_id: CatId,

    // Cosmetic traits, each an index into its palette.
    pub body_color: u8,
    pub eye_color: u8,
    pub pattern: u8,
    pub accessory: u8,
    pub background: u8,

    /// Marks a cat with a rare trait; forces Legendary rarity and
    /// propagates probabilistically to offspring.
    pub is_special: bool,

    // Combat stats. 1..=100 under normal play, up to 150 for fusions.
    pub strength: u8,
    pub agility: u8,
    pub intelligence: u8,

    /// Rarity tier. Derived from stats and the special flag for founders;
    /// bred offspring carry a rolled tier and fusions are always Legendary.
    pub rarity: RarityTier,
}

impl Cat {
    /// Create a genesis founder: generation 0, no parents, rarity derived
    /// from stats and the special flag.
    #[allow(clippy::too_many_arguments)]
    pub fn founder(
        id: CatId,
        body_color: u8,
        eye_color: u8,
        pattern: u8,
        accessory: u8,
        background: u8,
        strength: u8,
        agility: u8,
        intelligence: u8,
        is_special: bool,
        birth_time_ms: u64,
    ) -> Cat {
        Cat {
            id,
            generation: 0,
            birth_time_ms,
            last_breed_time_ms: 0,
            matron_id: 0,
            sire_id: 0,
            body_color,
            eye_color,
            pattern,
            accessory,
            background,
            is_special,
            strength,
            agility,
            intelligence,
            rarity: classify_rarity(strength, agility, intelligence, is_special),
        }
    }

    /// Sum of the three combat stats.
    pub fn stat_total(&self) -> u16 {
        self.strength as u16 + self.agility as u16 + self.intelligence as u16
    }

    /// Whether this cat is a generation-0 founder.
    pub fn is_founder(&self) -> bool {
        self.generation == 0
    }

    /// Validate stats and palette indices. Fusion results may carry stats
    /// up to the extended ceiling, so the stat check uses that bound.
    pub fn validate(&self) -> Result<(), EntityError> {
        for (stat, value) in [
            ("strength", self.strength),
            ("agility", self.agility),
            ("intelligence", self.intelligence),
        ] {
            if value < STAT_MIN || value > FUSED_STAT_MAX {
                return Err(EntityError::StatOutOfRange {
                    stat,
                    value,
                    min: STAT_MIN,
                    max: FUSED_STAT_MAX,
                });
            }
        }
        for (dimension, index, palette_size) in [
            ("body color", self.body_color, BODY_COLOR_COUNT),
            ("eye color", self.eye_color, EYE_COLOR_COUNT),
            ("pattern", self.pattern, PATTERN_COUNT),
            ("accessory", self.accessory, ACCESSORY_COUNT),
            ("background", self.background, BACKGROUND_COUNT),
        ] {
            if index >= palette_size {
                return Err(EntityError::UnknownPaletteIndex {
                    dimension,
                    index,
                    palette_size,
                });
            }
        }
        Ok(())
    }

    /// Remaining breeding cooldown in milliseconds, given the caller's
    /// current time. The engines do not enforce this; callers check it
    /// before invoking breeding.
    pub fn breeding_cooldown_remaining_ms(&self, now_ms: u64) -> u64 {
        if self.last_breed_time_ms == 0 {
            return 0;
        }
        let cooldown_end = self.last_breed_time_ms.saturating_add(BREEDING_COOLDOWN_MS);
        cooldown_end.saturating_sub(now_ms)
    }

    /// Whether the breeding cooldown has elapsed.
    pub fn ready_to_breed(&self, now_ms: u64) -> bool {
        self.breeding_cooldown_remaining_ms(now_ms) == 0
    }
}
