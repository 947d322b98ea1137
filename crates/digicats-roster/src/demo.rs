//! Deterministic demo roster generation.
//!
//! Every cat is a pure function of its id: the id seeds a private RNG,
//! so the same id always yields the same cat regardless of call order.
//! The caller supplies "now" so birth and breed times land in a recent
//! window without the generator reading a clock.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use digicats_core::constants::*;
use digicats_core::{classify_rarity, Cat, CatId};

/// Prime multiplier spreading consecutive ids across seed space.
const SEED_MULTIPLIER: u64 = 7919;

/// Flat stat bonus per quality tier of the generated cat.
const QUALITY_STAT_BONUS: u8 = 10;

/// Chance a demo cat carries the special flag.
const DEMO_SPECIAL_CHANCE: f64 = 0.10;

/// Demo cats span generations 0..5.
const DEMO_GENERATION_SPAN: u32 = 5;

/// Birth times fall within the last 30 days, breed times the last 7.
const BIRTH_WINDOW_MS: u64 = 30 * 24 * 60 * 60 * 1000;
const BREED_WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Generate the demo cat for an id.
pub fn demo_cat(id: CatId, now_ms: u64) -> Cat {
    let mut rng = ChaCha8Rng::seed_from_u64(id.wrapping_mul(SEED_MULTIPLIER));

    let quality = quality_tier(&mut rng);
    let bonus = quality * QUALITY_STAT_BONUS;
    let strength = demo_stat(&mut rng, bonus);
    let agility = demo_stat(&mut rng, bonus);
    let intelligence = demo_stat(&mut rng, bonus);

    let generation = rng.gen_range(0..DEMO_GENERATION_SPAN);
    let (matron_id, sire_id) = if generation == 0 || id <= 1 {
        (0, 0)
    } else {
        (rng.gen_range(1..id), rng.gen_range(1..id))
    };

    let birth_time_ms = now_ms.saturating_sub(rng.gen_range(0..BIRTH_WINDOW_MS));
    let last_breed_time_ms = now_ms.saturating_sub(rng.gen_range(0..BREED_WINDOW_MS));

    let body_color = rng.gen_range(0..BODY_COLOR_COUNT);
    let eye_color = rng.gen_range(0..EYE_COLOR_COUNT);
    let pattern = rng.gen_range(0..PATTERN_COUNT);
    let accessory = rng.gen_range(0..ACCESSORY_COUNT);
    let background = rng.gen_range(0..BACKGROUND_COUNT);

    let is_special = rng.gen::<f64>() < DEMO_SPECIAL_CHANCE;

    Cat {
        id,
        generation,
        birth_time_ms,
        last_breed_time_ms,
        matron_id,
        sire_id,
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

/// Generate a roster of `count` cats with ids `1..=count`.
pub fn roster(count: u64, now_ms: u64) -> Vec<Cat> {
    (1..=count).map(|id| demo_cat(id, now_ms)).collect()
}

/// Quality tier 0-4, rolled by successive gates so higher tiers stay
/// rare: 5% for tier 4, then 15%, 35%, and 60% gates for the rest.
fn quality_tier(rng: &mut impl Rng) -> u8 {
    if rng.gen::<f64>() < 0.05 {
        4
    } else if rng.gen::<f64>() < 0.15 {
        3
    } else if rng.gen::<f64>() < 0.35 {
        2
    } else if rng.gen::<f64>() < 0.6 {
        1
    } else {
        0
    }
}

/// One base stat: 20-79 plus the quality bonus, capped at the ceiling.
fn demo_stat(rng: &mut impl Rng, bonus: u8) -> u8 {
    let base = 20 + rng.gen_range(0..60u8);
    base.saturating_add(bonus).min(STAT_MAX)
}
