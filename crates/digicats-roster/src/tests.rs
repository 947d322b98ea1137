//! Tests for demo roster generation and the progression ledger.

use digicats_core::constants::STAT_MAX;
use digicats_core::{classify_rarity, RarityTier};

use crate::demo::{demo_cat, roster};
use crate::progression::{
    battle_xp, next_ability, stage_for_level, unlocked_abilities, xp_for_level,
    ProgressionTracker, ABILITIES, LEVEL_CAP,
};

const NOW_MS: u64 = 1_700_000_000_000;

// ---- Demo roster ----

#[test]
fn test_demo_cat_is_deterministic() {
    for id in [1, 7, 42, 9999] {
        assert_eq!(demo_cat(id, NOW_MS), demo_cat(id, NOW_MS));
    }
}

#[test]
fn test_demo_cats_are_valid() {
    for id in 1..=100 {
        let cat = demo_cat(id, NOW_MS);
        assert_eq!(cat.id, id);
        assert!(cat.validate().is_ok(), "cat {id} failed validation");
        assert!(cat.strength <= STAT_MAX);
        assert!(cat.birth_time_ms <= NOW_MS);
        assert!(cat.last_breed_time_ms <= NOW_MS);
    }
}

#[test]
fn test_demo_rarity_matches_classifier() {
    for id in 1..=200 {
        let cat = demo_cat(id, NOW_MS);
        assert_eq!(
            cat.rarity,
            classify_rarity(cat.strength, cat.agility, cat.intelligence, cat.is_special)
        );
        if cat.is_special {
            assert_eq!(cat.rarity, RarityTier::Legendary);
        }
    }
}

#[test]
fn test_demo_lineage_consistency() {
    for id in 1..=200 {
        let cat = demo_cat(id, NOW_MS);
        if cat.generation == 0 || id == 1 {
            assert_eq!(cat.matron_id, 0);
            assert_eq!(cat.sire_id, 0);
        } else {
            assert!(cat.matron_id >= 1 && cat.matron_id < id);
            assert!(cat.sire_id >= 1 && cat.sire_id < id);
        }
    }
}

#[test]
fn test_roster_ids_and_variety() {
    let cats = roster(16, NOW_MS);
    assert_eq!(cats.len(), 16);
    for (i, cat) in cats.iter().enumerate() {
        assert_eq!(cat.id, i as u64 + 1);
    }

    // Different ids produce different cats.
    let distinct_bodies: std::collections::HashSet<u8> =
        cats.iter().map(|c| c.body_color).collect();
    assert!(distinct_bodies.len() > 1);
}

// ---- Progression ----

#[test]
fn test_xp_curve() {
    assert_eq!(xp_for_level(1), 100);
    assert_eq!(xp_for_level(2), 150);
    assert_eq!(xp_for_level(3), 225);
    assert_eq!(xp_for_level(4), 337);
    // The curve is strictly increasing.
    for level in 1..50 {
        assert!(xp_for_level(level + 1) > xp_for_level(level));
    }
}

#[test]
fn test_battle_xp_rewards() {
    assert_eq!(battle_xp(3, true), 80);
    assert_eq!(battle_xp(3, false), 16);
    assert_eq!(battle_xp(0, true), 50);
    assert_eq!(battle_xp(0, false), 10);
}

#[test]
fn test_fresh_cat_starts_at_level_one() {
    let tracker = ProgressionTracker::new();
    let p = tracker.progress(1);
    assert_eq!(p.level, 1);
    assert_eq!(p.total_xp, 0);
    assert_eq!(p.xp_into_level, 0);
    assert_eq!(p.xp_to_next, 100);
    assert_eq!(p.stage.name, "Kitten");
    assert!(p.abilities.is_empty());
}

#[test]
fn test_level_ups_consume_xp() {
    let mut tracker = ProgressionTracker::new();
    tracker.add_xp(1, 100);
    let p = tracker.progress(1);
    assert_eq!(p.level, 2);
    assert_eq!(p.xp_into_level, 0);
    assert_eq!(p.xp_to_next, 150);
    assert_eq!(p.abilities.len(), 1);
    assert_eq!(p.abilities[0].name, "Quick Paws");

    tracker.add_xp(1, 170);
    let p = tracker.progress(1);
    assert_eq!(p.level, 3);
    assert_eq!(p.xp_into_level, 20);
    assert_eq!(p.xp_to_next, 225);
    assert_eq!(p.abilities.len(), 2);
}

#[test]
fn test_award_battle_xp_accumulates() {
    let mut tracker = ProgressionTracker::new();
    let first = tracker.award_battle_xp(7, 2, true);
    assert_eq!(first, 70);
    let second = tracker.award_battle_xp(7, 2, false);
    assert_eq!(second, 14);
    assert_eq!(tracker.total_xp(7), 84);
    // Other cats are unaffected.
    assert_eq!(tracker.total_xp(8), 0);
}

#[test]
fn test_level_is_capped() {
    let mut tracker = ProgressionTracker::new();
    tracker.add_xp(1, u64::MAX);
    let p = tracker.progress(1);
    assert!(p.level <= LEVEL_CAP);
    assert!(p.xp_into_level < p.xp_to_next || p.level == LEVEL_CAP);
}

#[test]
fn test_evolution_stage_bands() {
    assert_eq!(stage_for_level(1).name, "Kitten");
    assert_eq!(stage_for_level(5).name, "Kitten");
    assert_eq!(stage_for_level(6).name, "Young Cat");
    assert_eq!(stage_for_level(11).name, "Adult Cat");
    assert_eq!(stage_for_level(16).name, "Elder Cat");
    assert_eq!(stage_for_level(21).name, "Legendary");
    assert_eq!(stage_for_level(LEVEL_CAP).name, "Legendary");
}

#[test]
fn test_ability_unlock_order() {
    // The catalog is sorted by unlock level.
    for pair in ABILITIES.windows(2) {
        assert!(pair[0].unlock_level <= pair[1].unlock_level);
    }

    assert!(unlocked_abilities(1).is_empty());
    assert_eq!(unlocked_abilities(5).len(), 4);
    assert_eq!(unlocked_abilities(LEVEL_CAP).len(), ABILITIES.len());

    assert_eq!(next_ability(1).unwrap().name, "Quick Paws");
    assert_eq!(next_ability(13).unwrap().name, "Aura Shield");
    assert!(next_ability(20).is_none());
}

#[test]
fn test_progression_serializes() {
    let mut tracker = ProgressionTracker::new();
    tracker.add_xp(1, 400);
    let p = tracker.progress(1);
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"level\""));
    assert!(json.contains("Kitten"));
}
