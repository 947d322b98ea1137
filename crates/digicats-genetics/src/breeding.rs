//! Committed breeding — produces one concrete offspring.

use rand::Rng;

use digicats_core::constants::*;
use digicats_core::{Cat, RarityTier};

use crate::errors::GeneticsError;

/// Breed two parents into a new offspring.
///
/// Consumes the random source once per decision point, in a fixed order:
/// rarity roll, id, the five cosmetic traits, the special-flag roll, then
/// the three stats. `born_at_ms` is the caller's clock; the engine never
/// reads time itself. Cooldown enforcement is the caller's job.
pub fn breed(
    matron: &Cat,
    sire: &Cat,
    born_at_ms: u64,
    rng: &mut impl Rng,
) -> Result<Cat, GeneticsError> {
    matron.validate()?;
    sire.validate()?;

    let rarity = roll_rarity(matron.rarity, sire.rarity, rng);
    let rarity_bonus = rarity.index() * RARITY_STAT_BONUS;

    let id = rng.gen_range(OFFSPRING_ID_MIN..OFFSPRING_ID_MAX);

    let body_color = inherit_trait(
        matron.body_color,
        sire.body_color,
        BODY_MUTATION_CHANCE,
        BODY_COLOR_COUNT,
        rng,
    );
    let eye_color = inherit_trait(
        matron.eye_color,
        sire.eye_color,
        EYE_MUTATION_CHANCE,
        EYE_COLOR_COUNT,
        rng,
    );
    let pattern = inherit_trait(
        matron.pattern,
        sire.pattern,
        PATTERN_MUTATION_CHANCE,
        PATTERN_COUNT,
        rng,
    );
    let accessory = inherit_trait(
        matron.accessory,
        sire.accessory,
        ACCESSORY_MUTATION_CHANCE,
        ACCESSORY_COUNT,
        rng,
    );
    let background = inherit_trait(
        matron.background,
        sire.background,
        BACKGROUND_MUTATION_CHANCE,
        BACKGROUND_COUNT,
        rng,
    );

    let special_roll = rng.gen::<f64>();
    let is_special =
        (matron.is_special || sire.is_special) && special_roll < SPECIAL_INHERIT_CHANCE;

    let strength = boosted_stat(inherit_stat(matron.strength, sire.strength, rng), rarity_bonus);
    let agility = boosted_stat(inherit_stat(matron.agility, sire.agility, rng), rarity_bonus);
    let intelligence = boosted_stat(
        inherit_stat(matron.intelligence, sire.intelligence, rng),
        rarity_bonus,
    );

    let offspring = Cat {
        id,
        generation: matron.generation.max(sire.generation) + 1,
        birth_time_ms: born_at_ms,
        last_breed_time_ms: 0,
        matron_id: matron.id,
        sire_id: sire.id,
        body_color,
        eye_color,
        pattern,
        accessory,
        background,
        is_special,
        strength,
        agility,
        intelligence,
        rarity,
    };

    tracing::debug!(
        matron = matron.id,
        sire = sire.id,
        offspring = offspring.id,
        generation = offspring.generation,
        rarity = rarity.name(),
        "offspring bred"
    );

    Ok(offspring)
}

/// Roll the offspring rarity: one uniform draw tested against thresholds
/// that rise with the average parent tier, high tier first.
fn roll_rarity(matron: RarityTier, sire: RarityTier, rng: &mut impl Rng) -> RarityTier {
    let parent_avg = (matron.index() as f64 + sire.index() as f64) / 2.0;
    let roll = rng.gen::<f64>();

    if roll < LEGENDARY_ROLL_BASE + parent_avg * LEGENDARY_ROLL_SLOPE {
        RarityTier::Legendary
    } else if roll < EPIC_ROLL_BASE + parent_avg * EPIC_ROLL_SLOPE {
        RarityTier::Epic
    } else if roll < RARE_ROLL_BASE + parent_avg * RARE_ROLL_SLOPE {
        RarityTier::Rare
    } else if roll < UNCOMMON_ROLL_BASE + parent_avg * UNCOMMON_ROLL_SLOPE {
        RarityTier::Uncommon
    } else {
        RarityTier::Common
    }
}

/// Inherit one cosmetic trait: mutate to a uniform palette index with the
/// given chance, otherwise a 50/50 pick between the parents.
fn inherit_trait(
    matron_value: u8,
    sire_value: u8,
    mutation_chance: f64,
    palette_size: u8,
    rng: &mut impl Rng,
) -> u8 {
    if rng.gen::<f64>() < mutation_chance {
        return rng.gen_range(0..palette_size);
    }
    if rng.gen::<f64>() < 0.5 {
        matron_value
    } else {
        sire_value
    }
}

/// Inherit one stat: parent average plus uniform variance, clamped to the
/// normal range.
fn inherit_stat(matron_value: u8, sire_value: u8, rng: &mut impl Rng) -> u8 {
    let avg = (matron_value as f64 + sire_value as f64) / 2.0;
    let variance = rng.gen_range(-STAT_VARIANCE..STAT_VARIANCE);
    (avg + variance).round().clamp(STAT_MIN as f64, STAT_MAX as f64) as u8
}

/// Apply the rarity-derived bonus, clamping back to the normal ceiling.
fn boosted_stat(stat: u8, bonus: u8) -> u8 {
    stat.saturating_add(bonus).min(STAT_MAX)
}
