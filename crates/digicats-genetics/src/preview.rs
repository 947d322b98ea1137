//! Offspring trait preview — display-only probability tables.
//!
//! The trait and rarity tables are static functions of the two parents'
//! current values; they commit nothing and consume no randomness. The
//! stat ranges carry a display-flavor lucky bonus that is drawn fresh on
//! every recompute, which is the one place the preview touches the RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use digicats_core::constants::*;
use digicats_core::{Cat, RarityTier};

use crate::errors::GeneticsError;

/// One possible outcome for a trait dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitChance {
    /// Outcome label ("Same as parents", "Matron color", "Mutation", ...).
    pub outcome: String,
    /// Display value: a hex color for body/eyes, a pattern name otherwise.
    pub display: String,
    /// Probability in percent. Entries for one dimension sum to 100.
    pub percent: u8,
}

/// Probability tables for the previewed trait dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitPreview {
    pub body: Vec<TraitChance>,
    pub eyes: Vec<TraitChance>,
    pub pattern: Vec<TraitChance>,
}

/// Predicted range for one combat stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
    pub avg: i32,
}

/// Predicted ranges for the three combat stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    pub strength: StatRange,
    pub agility: StatRange,
    pub intelligence: StatRange,
}

/// Chance of one rarity tier for the offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityChance {
    pub tier: RarityTier,
    pub percent: u8,
}

/// The full breeding preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffspringPreview {
    pub traits: TraitPreview,
    pub stats: StatRanges,
    pub rarity: Vec<RarityChance>,
    /// Generation the offspring will be born into.
    pub generation: u32,
}

/// Build the full preview for a parent pair.
pub fn preview(
    matron: &Cat,
    sire: &Cat,
    rng: &mut impl Rng,
) -> Result<OffspringPreview, GeneticsError> {
    matron.validate()?;
    sire.validate()?;
    Ok(OffspringPreview {
        traits: trait_probabilities(matron, sire),
        stats: stat_ranges(matron, sire, rng),
        rarity: rarity_chances(matron, sire),
        generation: matron.generation.max(sire.generation) + 1,
    })
}

/// Trait probability tables. Pure: consumes no randomness.
pub fn trait_probabilities(matron: &Cat, sire: &Cat) -> TraitPreview {
    let body = if matron.body_color == sire.body_color {
        vec![
            body_chance("Same as parents", matron.body_color, 85),
            body_chance("Mutation", (matron.body_color + 1) % BODY_COLOR_COUNT, 15),
        ]
    } else {
        vec![
            body_chance("Matron color", matron.body_color, 40),
            body_chance("Sire color", sire.body_color, 40),
            body_chance(
                "Blend",
                (matron.body_color + sire.body_color) % BODY_COLOR_COUNT,
                20,
            ),
        ]
    };

    let eyes = if matron.eye_color == sire.eye_color {
        vec![
            eye_chance("Same as parents", matron.eye_color, 80),
            eye_chance("Mutation", (matron.eye_color + 2) % EYE_COLOR_COUNT, 20),
        ]
    } else {
        vec![
            eye_chance("Matron eyes", matron.eye_color, 45),
            eye_chance("Sire eyes", sire.eye_color, 45),
            eye_chance(
                "Rare mutation",
                (matron.eye_color + sire.eye_color) % EYE_COLOR_COUNT,
                10,
            ),
        ]
    };

    let pattern = if matron.pattern == sire.pattern {
        vec![
            pattern_chance(PATTERNS[matron.pattern as usize], 75),
            pattern_chance(PATTERNS[((matron.pattern + 1) % PATTERN_COUNT) as usize], 25),
        ]
    } else {
        vec![
            pattern_chance(PATTERNS[matron.pattern as usize], 35),
            pattern_chance(PATTERNS[sire.pattern as usize], 35),
            pattern_chance("Mixed", 30),
        ]
    };

    TraitPreview {
        body,
        eyes,
        pattern,
    }
}

/// Predicted stat ranges: `[avg - 10, avg + 15 + bonus]` per stat, where
/// the bonus is a fresh 30%-chance lucky roll shared by all three stats.
pub fn stat_ranges(matron: &Cat, sire: &Cat, rng: &mut impl Rng) -> StatRanges {
    let bonus = if rng.gen::<f64>() < PREVIEW_BONUS_CHANCE {
        rng.gen_range(PREVIEW_BONUS_MIN..=PREVIEW_BONUS_MAX)
    } else {
        0
    };

    let range = |a: u8, b: u8| {
        let avg = (a as i32 + b as i32) / 2;
        StatRange {
            min: avg - PREVIEW_RANGE_BELOW,
            max: avg + PREVIEW_RANGE_ABOVE + bonus,
            avg,
        }
    };

    StatRanges {
        strength: range(matron.strength, sire.strength),
        agility: range(matron.agility, sire.agility),
        intelligence: range(matron.intelligence, sire.intelligence),
    }
}

/// Offspring rarity distribution. Pure: consumes no randomness.
///
/// Starts from the base distribution and shifts mass upward when the
/// higher parent tier is Rare or better; each entry floors at 0.
pub fn rarity_chances(matron: &Cat, sire: &Cat) -> Vec<RarityChance> {
    let mut chances = BASE_RARITY_CHANCES;
    let best_parent = matron.rarity.max(sire.rarity);

    if best_parent >= RarityTier::Epic {
        chances[RarityTier::Epic.index() as usize] += 10;
        chances[RarityTier::Legendary.index() as usize] += 3;
        chances[RarityTier::Common.index() as usize] -= 13;
    } else if best_parent >= RarityTier::Rare {
        chances[RarityTier::Rare.index() as usize] += 10;
        chances[RarityTier::Epic.index() as usize] += 5;
        chances[RarityTier::Common.index() as usize] -= 15;
    }

    RarityTier::ALL
        .iter()
        .map(|&tier| RarityChance {
            tier,
            percent: chances[tier.index() as usize].max(0) as u8,
        })
        .collect()
}

fn body_chance(outcome: &str, index: u8, percent: u8) -> TraitChance {
    TraitChance {
        outcome: outcome.to_string(),
        display: BODY_COLORS[index as usize].to_string(),
        percent,
    }
}

fn eye_chance(outcome: &str, index: u8, percent: u8) -> TraitChance {
    TraitChance {
        outcome: outcome.to_string(),
        display: EYE_COLORS[index as usize].to_string(),
        percent,
    }
}

fn pattern_chance(name: &str, percent: u8) -> TraitChance {
    TraitChance {
        outcome: name.to_string(),
        display: name.to_string(),
        percent,
    }
}
