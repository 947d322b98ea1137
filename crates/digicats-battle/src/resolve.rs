//! Per-turn attack resolution.
//!
//! Pure functions over plain data: the random draws are separated from
//! the damage math so tests can pin exact roll values.

use rand::Rng;

use digicats_core::constants::*;
use digicats_core::Cat;

use crate::encounter::AttackOutcome;

/// The three random draws consumed by one attack resolution.
///
/// All three are always drawn, even when the miss roll short-circuits
/// the rest, so one attack consumes a fixed amount of the random stream.
#[derive(Debug, Clone, Copy)]
pub struct AttackRolls {
    /// Uniform [0, 1); below `MISS_CHANCE` the attack misses.
    pub miss: f64,
    /// Uniform [-DAMAGE_VARIANCE, +DAMAGE_VARIANCE).
    pub variance: f64,
    /// Uniform [0, 1); below `CRIT_CHANCE` the hit is critical.
    pub crit: f64,
}

impl AttackRolls {
    /// Draw a full set of rolls from the random source.
    pub fn draw(rng: &mut impl Rng) -> AttackRolls {
        AttackRolls {
            miss: rng.gen::<f64>(),
            variance: rng.gen_range(-DAMAGE_VARIANCE..DAMAGE_VARIANCE),
            crit: rng.gen::<f64>(),
        }
    }
}

/// Resolve one attack given the combatants and fixed rolls.
///
/// Non-miss damage is `floor(base - defense + variance)` floored at
/// `MIN_HIT_DAMAGE`; criticals then multiply by `CRIT_MULTIPLIER` and
/// floor again. A miss deals zero damage but still consumes the turn.
pub fn resolve_attack(attacker: &Cat, defender: &Cat, rolls: &AttackRolls) -> (AttackOutcome, u32) {
    if rolls.miss < MISS_CHANCE {
        return (AttackOutcome::Miss, 0);
    }

    let base = ATTACK_STRENGTH_WEIGHT * attacker.strength as f64
        + ATTACK_AGILITY_WEIGHT * attacker.agility as f64;
    let defense = DEFENSE_AGILITY_WEIGHT * defender.agility as f64
        + DEFENSE_INTELLIGENCE_WEIGHT * defender.intelligence as f64;

    let raw = (base - defense + rolls.variance).floor() as i64;
    let mut damage = raw.max(MIN_HIT_DAMAGE as i64) as u32;

    if rolls.crit < CRIT_CHANCE {
        damage = (damage as f64 * CRIT_MULTIPLIER).floor() as u32;
        (AttackOutcome::Critical, damage)
    } else {
        (AttackOutcome::Hit, damage)
    }
}
