//! Tests for the encounter state machine and attack resolution.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use digicats_core::constants::{CRIT_CHANCE, MAX_HEALTH, MIN_HIT_DAMAGE, MISS_CHANCE};
use digicats_core::Cat;

use crate::encounter::{AttackOutcome, BattlePhase, Encounter, Side};
use crate::errors::BattleError;
use crate::resolve::{resolve_attack, AttackRolls};

fn make_cat(id: u64, strength: u8, agility: u8, intelligence: u8) -> Cat {
    Cat::founder(id, 2, 1, 0, 0, 0, strength, agility, intelligence, false, 0)
}

fn staged_encounter() -> Encounter {
    let player = make_cat(1, 80, 40, 30);
    let opponent = make_cat(2, 60, 20, 10);
    let mut enc = Encounter::new(player, opponent, Side::Player).unwrap();
    enc.start().unwrap();
    enc
}

/// Run an encounter to completion, always attacking with the side whose
/// turn it is. Returns the number of turns resolved.
fn run_to_end(enc: &mut Encounter, rng: &mut ChaCha8Rng) -> usize {
    let mut turns = 0;
    while enc.phase() == BattlePhase::Battling {
        let side = enc.turn();
        enc.resolve_turn(side, rng).unwrap();
        turns += 1;
        assert!(turns < 10_000, "battle failed to terminate");
    }
    turns
}

// ---- Attack resolution ----

#[test]
fn test_fixed_roll_damage() {
    // str 80 / agi 40 attacker vs agi 20 / int 10 defender, variance 0,
    // no miss, no crit: floor(64 + 12 - (4 + 1)) = 71.
    let attacker = make_cat(1, 80, 40, 1);
    let defender = make_cat(2, 50, 20, 10);
    let rolls = AttackRolls {
        miss: 0.5,
        variance: 0.0,
        crit: 0.5,
    };
    let (outcome, damage) = resolve_attack(&attacker, &defender, &rolls);
    assert_eq!(outcome, AttackOutcome::Hit);
    assert_eq!(damage, 71);
}

#[test]
fn test_miss_deals_zero() {
    let attacker = make_cat(1, 80, 40, 1);
    let defender = make_cat(2, 50, 20, 10);
    let rolls = AttackRolls {
        miss: MISS_CHANCE - 0.001,
        variance: 0.0,
        crit: 0.0, // a miss is never upgraded to a critical
    };
    let (outcome, damage) = resolve_attack(&attacker, &defender, &rolls);
    assert_eq!(outcome, AttackOutcome::Miss);
    assert_eq!(damage, 0);
}

#[test]
fn test_damage_floor_on_weak_hit() {
    // Weak attacker into a strong defender bottoms out at the floor,
    // even with the worst variance draw.
    let attacker = make_cat(1, 1, 1, 1);
    let defender = make_cat(2, 1, 100, 100);
    let rolls = AttackRolls {
        miss: 0.5,
        variance: -4.999,
        crit: 0.5,
    };
    let (outcome, damage) = resolve_attack(&attacker, &defender, &rolls);
    assert_eq!(outcome, AttackOutcome::Hit);
    assert_eq!(damage, MIN_HIT_DAMAGE);
}

#[test]
fn test_critical_is_floor_of_one_and_a_half_times() {
    let attacker = make_cat(1, 80, 40, 1);
    let defender = make_cat(2, 50, 20, 10);

    for variance in [-4.0, -1.5, 0.0, 2.25, 4.9] {
        let base = AttackRolls {
            miss: 0.5,
            variance,
            crit: 0.5,
        };
        let crit = AttackRolls {
            miss: 0.5,
            variance,
            crit: CRIT_CHANCE - 0.001,
        };
        let (_, normal_damage) = resolve_attack(&attacker, &defender, &base);
        let (outcome, crit_damage) = resolve_attack(&attacker, &defender, &crit);
        assert_eq!(outcome, AttackOutcome::Critical);
        assert_eq!(crit_damage, (normal_damage as f64 * 1.5).floor() as u32);
    }
}

#[test]
fn test_roll_frequencies() {
    // Statistical check over many draws: miss and crit frequencies land
    // near their configured probabilities.
    let attacker = make_cat(1, 80, 40, 1);
    let defender = make_cat(2, 50, 20, 10);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let trials = 5000;
    let mut misses = 0;
    let mut crits = 0;
    for _ in 0..trials {
        let rolls = AttackRolls::draw(&mut rng);
        match resolve_attack(&attacker, &defender, &rolls).0 {
            AttackOutcome::Miss => misses += 1,
            AttackOutcome::Critical => crits += 1,
            AttackOutcome::Hit => {}
        }
    }

    let miss_rate = misses as f64 / trials as f64;
    let crit_rate = crits as f64 / trials as f64;
    assert!((miss_rate - 0.10).abs() < 0.02, "miss rate {miss_rate}");
    // Crits only occur on non-misses: expected 0.9 * 0.15 = 0.135.
    assert!((crit_rate - 0.135).abs() < 0.02, "crit rate {crit_rate}");
}

// ---- State machine ----

#[test]
fn test_cannot_attack_before_start() {
    let player = make_cat(1, 50, 50, 50);
    let opponent = make_cat(2, 50, 50, 50);
    let mut enc = Encounter::new(player, opponent, Side::Player).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = enc.resolve_turn(Side::Player, &mut rng).unwrap_err();
    assert_eq!(
        err,
        BattleError::NotBattling {
            phase: BattlePhase::Ready
        }
    );
    assert_eq!(enc.health(Side::Opponent), MAX_HEALTH);
}

#[test]
fn test_start_only_from_ready() {
    let mut enc = staged_encounter();
    let err = enc.start().unwrap_err();
    assert_eq!(
        err,
        BattleError::NotReady {
            phase: BattlePhase::Battling
        }
    );
}

#[test]
fn test_out_of_turn_rejected() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = enc.resolve_turn(Side::Opponent, &mut rng).unwrap_err();
    assert_eq!(
        err,
        BattleError::OutOfTurn {
            side: Side::Opponent,
            expected: Side::Player
        }
    );
    // No state change on rejection.
    assert!(enc.events().is_empty());
    assert_eq!(enc.health(Side::Player), MAX_HEALTH);
}

#[test]
fn test_animation_gate_blocks_resolution() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    enc.begin_animation();
    let err = enc.resolve_turn(Side::Player, &mut rng).unwrap_err();
    assert_eq!(err, BattleError::ResolutionInFlight);
    assert!(enc.events().is_empty());

    enc.end_animation();
    enc.resolve_turn(Side::Player, &mut rng).unwrap();
    assert_eq!(enc.events().len(), 1);
}

#[test]
fn test_turns_alternate() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    run_to_end(&mut enc, &mut rng);
    for pair in enc.events().windows(2) {
        assert_eq!(pair[1].side, pair[0].side.opposite());
    }
    assert_eq!(enc.events()[0].side, Side::Player);
}

#[test]
fn test_miss_still_consumes_turn() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mut saw_miss = false;
    while enc.phase() == BattlePhase::Battling {
        let side = enc.turn();
        let event = enc.resolve_turn(side, &mut rng).unwrap();
        if event.outcome == AttackOutcome::Miss {
            saw_miss = true;
            assert_eq!(event.damage, 0);
            if enc.phase() == BattlePhase::Battling {
                assert_eq!(enc.turn(), side.opposite());
            }
        }
    }
    assert!(saw_miss, "seed should produce at least one miss");
}

#[test]
fn test_health_stays_in_bounds() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    while enc.phase() == BattlePhase::Battling {
        let side = enc.turn();
        enc.resolve_turn(side, &mut rng).unwrap();
        assert!(enc.health(Side::Player) <= MAX_HEALTH);
        assert!(enc.health(Side::Opponent) <= MAX_HEALTH);
    }
    // The loser is clamped at exactly zero, never below.
    let loser = enc.winner().unwrap().opposite();
    assert_eq!(enc.health(loser), 0);
}

#[test]
fn test_exactly_one_winner_and_no_turns_after_end() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    run_to_end(&mut enc, &mut rng);
    assert_eq!(enc.phase(), BattlePhase::Ended);
    let winner = enc.winner().unwrap();
    assert!(enc.health(winner) > 0);
    assert_eq!(enc.health(winner.opposite()), 0);

    let before = enc.events().len();
    for side in [Side::Player, Side::Opponent] {
        let err = enc.resolve_turn(side, &mut rng).unwrap_err();
        assert_eq!(
            err,
            BattleError::NotBattling {
                phase: BattlePhase::Ended
            }
        );
    }
    assert_eq!(enc.events().len(), before);
}

#[test]
fn test_fatal_blow_ends_encounter_immediately() {
    // Defender at 5 health: any non-miss hit (>= 5 damage) is fatal.
    let mut enc = staged_encounter();
    enc.set_health(Side::Opponent, 5);

    let mut rng = ChaCha8Rng::seed_from_u64(17);
    loop {
        let event = enc.resolve_turn(Side::Player, &mut rng).unwrap();
        match event.outcome {
            AttackOutcome::Miss => {
                // Give the turn back to the player and try again.
                assert_eq!(enc.phase(), BattlePhase::Battling);
                enc.resolve_turn(Side::Opponent, &mut rng).unwrap();
                if enc.phase() == BattlePhase::Ended {
                    // Opponent won first; restage.
                    enc = staged_encounter();
                    enc.set_health(Side::Opponent, 5);
                }
            }
            _ => {
                assert!(event.damage >= MIN_HIT_DAMAGE);
                assert_eq!(enc.phase(), BattlePhase::Ended);
                assert_eq!(enc.winner(), Some(Side::Player));
                break;
            }
        }
    }
}

#[test]
fn test_first_side_configurable() {
    let player = make_cat(1, 50, 50, 50);
    let opponent = make_cat(2, 50, 50, 50);
    let mut enc = Encounter::new(player, opponent, Side::Opponent).unwrap();
    enc.start().unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let event = enc.resolve_turn(Side::Opponent, &mut rng).unwrap();
    assert_eq!(event.side, Side::Opponent);
}

#[test]
fn test_invalid_combatant_rejected() {
    let mut bad = make_cat(1, 50, 50, 50);
    bad.body_color = 99;
    let opponent = make_cat(2, 50, 50, 50);
    assert!(Encounter::new(bad, opponent, Side::Player).is_err());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(12345);
    let mut rng_b = ChaCha8Rng::seed_from_u64(12345);

    let mut enc_a = staged_encounter();
    let mut enc_b = staged_encounter();
    run_to_end(&mut enc_a, &mut rng_a);
    run_to_end(&mut enc_b, &mut rng_b);

    assert_eq!(enc_a.events(), enc_b.events());
    assert_eq!(enc_a.winner(), enc_b.winner());
    assert_eq!(enc_a.log(), enc_b.log());
}

#[test]
fn test_determinism_different_seeds() {
    let mut diverged = false;
    for seed in 0..20u64 {
        let mut rng_a = ChaCha8Rng::seed_from_u64(seed);
        let mut rng_b = ChaCha8Rng::seed_from_u64(seed + 1000);
        let mut enc_a = staged_encounter();
        let mut enc_b = staged_encounter();
        run_to_end(&mut enc_a, &mut rng_a);
        run_to_end(&mut enc_b, &mut rng_b);
        if enc_a.events() != enc_b.events() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent battles");
}

// ---- Snapshot ----

#[test]
fn test_snapshot_serde_round_trip() {
    let mut enc = staged_encounter();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    run_to_end(&mut enc, &mut rng);

    let view = enc.snapshot();
    assert_eq!(view.phase, BattlePhase::Ended);
    assert!(view.log.len() <= crate::state::VIEW_LOG_LINES);
    assert_eq!(view.turns_resolved, enc.events().len());

    let json = serde_json::to_string(&view).unwrap();
    let back: crate::state::EncounterView = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}
