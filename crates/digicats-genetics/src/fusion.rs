//! Fusion — combines two cats into a guaranteed-Legendary result.
//!
//! Fusion skips the rarity roll entirely: the result is always Legendary,
//! always special, and its stats use the extended ceiling. Both inputs
//! are conventionally consumed by the caller afterward; the engine only
//! produces the new cat.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use digicats_core::constants::*;
use digicats_core::{Cat, CatId, RarityTier};

use crate::abilities::{FusionAbility, FUSION_ABILITIES};
use crate::errors::GeneticsError;

/// Lineage markers a fusion result inherits from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InheritedTrait {
    /// Either input carried the special flag.
    SpecialLineage,
    /// Either input was a generation-0 founder.
    GenesisBlood,
    /// Either input was Epic or better.
    NobleHeritage,
}

impl InheritedTrait {
    pub fn name(self) -> &'static str {
        match self {
            InheritedTrait::SpecialLineage => "Special Lineage",
            InheritedTrait::GenesisBlood => "Genesis Blood",
            InheritedTrait::NobleHeritage => "Noble Heritage",
        }
    }
}

/// A fusion result: the cat itself plus display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FusedCat {
    pub cat: Cat,
    /// Display scalar: the boosted average of both parents' six stats.
    pub fusion_power: u32,
    pub inherited: Vec<InheritedTrait>,
    /// 1-3 abilities drawn from the catalog without replacement.
    pub abilities: Vec<FusionAbility>,
}

/// Fuse two cats into one Legendary.
///
/// Stats are `floor(avg * 1.5)` clamped to the extended ceiling. Body and
/// eye color are per-field coin flips between the inputs, the pattern is
/// fully random, the accessory is the better of the two, and the
/// background is fixed to the legendary value.
pub fn fuse(
    first: &Cat,
    second: &Cat,
    id: CatId,
    born_at_ms: u64,
    rng: &mut impl Rng,
) -> Result<FusedCat, GeneticsError> {
    first.validate()?;
    second.validate()?;

    let strength = fused_stat(first.strength, second.strength);
    let agility = fused_stat(first.agility, second.agility);
    let intelligence = fused_stat(first.intelligence, second.intelligence);

    let body_color = if rng.gen::<f64>() < 0.5 {
        first.body_color
    } else {
        second.body_color
    };
    let eye_color = if rng.gen::<f64>() < 0.5 {
        first.eye_color
    } else {
        second.eye_color
    };
    let pattern = rng.gen_range(0..PATTERN_COUNT);

    let mut inherited = Vec::new();
    if first.is_special || second.is_special {
        inherited.push(InheritedTrait::SpecialLineage);
    }
    if first.is_founder() || second.is_founder() {
        inherited.push(InheritedTrait::GenesisBlood);
    }
    if first.rarity >= RarityTier::Epic || second.rarity >= RarityTier::Epic {
        inherited.push(InheritedTrait::NobleHeritage);
    }

    let ability_count = ability_draw_count(first.rarity, second.rarity);
    let abilities: Vec<FusionAbility> = FUSION_ABILITIES
        .choose_multiple(rng, ability_count)
        .copied()
        .collect();

    let stat_sum = first.stat_total() as f64 + second.stat_total() as f64;
    let fusion_power = (stat_sum / 6.0 * FUSION_STAT_MULTIPLIER).floor() as u32;

    let cat = Cat {
        id,
        generation: first.generation.max(second.generation) + 1,
        birth_time_ms: born_at_ms,
        last_breed_time_ms: 0,
        matron_id: first.id,
        sire_id: second.id,
        body_color,
        eye_color,
        pattern,
        accessory: first.accessory.max(second.accessory),
        background: FUSION_BACKGROUND,
        is_special: true,
        strength,
        agility,
        intelligence,
        rarity: RarityTier::Legendary,
    };

    tracing::debug!(
        first = first.id,
        second = second.id,
        fused = cat.id,
        fusion_power,
        "cats fused"
    );

    Ok(FusedCat {
        cat,
        fusion_power,
        inherited,
        abilities,
    })
}

/// Number of abilities drawn: floor of the average parent tier index,
/// plus one, capped at the maximum.
fn ability_draw_count(first: RarityTier, second: RarityTier) -> usize {
    let avg = (first.index() as usize + second.index() as usize) / 2;
    (avg + 1).min(MAX_FUSION_ABILITIES)
}

/// One fused stat: boosted parent average, clamped to the extended range.
fn fused_stat(a: u8, b: u8) -> u8 {
    let boosted = ((a as f64 + b as f64) / 2.0 * FUSION_STAT_MULTIPLIER).floor();
    boosted.clamp(STAT_MIN as f64, FUSED_STAT_MAX as f64) as u8
}
