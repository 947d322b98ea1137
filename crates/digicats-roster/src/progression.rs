//! XP ledger, levels, evolution stages, and the ability catalog.
//!
//! Progression is cosmetic-plus-unlocks: it never mutates a cat's base
//! stats. The tracker is a plain in-memory map from cat id to total XP;
//! everything else is derived from that one number.

use std::collections::HashMap;

use serde::Serialize;

use digicats_core::CatId;

/// Hard level cap.
pub const LEVEL_CAP: u32 = 99;

/// XP required to clear a given level: `floor(100 * 1.5^(level - 1))`.
pub fn xp_for_level(level: u32) -> u64 {
    (100.0 * 1.5f64.powi(level as i32 - 1)).floor() as u64
}

/// XP awarded for a battle against an opponent of the given level.
pub fn battle_xp(opponent_level: u32, won: bool) -> u64 {
    if won {
        50 + 10 * opponent_level as u64
    } else {
        10 + 2 * opponent_level as u64
    }
}

/// How an ability is used in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AbilityKind {
    Passive,
    Active,
    Ultimate,
}

/// A level-gated ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_level: u32,
    pub kind: AbilityKind,
}

/// The full ability catalog, ordered by unlock level.
pub const ABILITIES: [Ability; 13] = [
    Ability {
        name: "Quick Paws",
        description: "+5 Agility in battles",
        unlock_level: 2,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Sharp Claws",
        description: "+5 Strength in battles",
        unlock_level: 3,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Keen Eyes",
        description: "+5 Intelligence in battles",
        unlock_level: 4,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Dodge",
        description: "15% chance to avoid attacks",
        unlock_level: 5,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Power Strike",
        description: "Deal 1.5x damage (3 turn cooldown)",
        unlock_level: 6,
        kind: AbilityKind::Active,
    },
    Ability {
        name: "Healing Purr",
        description: "Restore 15 HP (4 turn cooldown)",
        unlock_level: 7,
        kind: AbilityKind::Active,
    },
    Ability {
        name: "Intimidate",
        description: "Reduce enemy STR by 10% for 2 turns",
        unlock_level: 8,
        kind: AbilityKind::Active,
    },
    Ability {
        name: "Ninth Life",
        description: "Survive fatal blow with 1 HP once per battle",
        unlock_level: 10,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Critical Master",
        description: "+10% critical hit chance",
        unlock_level: 11,
        kind: AbilityKind::Passive,
    },
    Ability {
        name: "Combo Attack",
        description: "Attack twice in one turn (5 turn cooldown)",
        unlock_level: 13,
        kind: AbilityKind::Active,
    },
    Ability {
        name: "Aura Shield",
        description: "Block next attack completely",
        unlock_level: 15,
        kind: AbilityKind::Active,
    },
    Ability {
        name: "Legendary Roar",
        description: "Stun enemy for 1 turn + 20 damage",
        unlock_level: 18,
        kind: AbilityKind::Ultimate,
    },
    Ability {
        name: "Nine Lives Fury",
        description: "Deal 9 rapid hits of 5 damage each",
        unlock_level: 20,
        kind: AbilityKind::Ultimate,
    },
];

/// One evolution stage, spanning an inclusive level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvolutionStage {
    pub min_level: u32,
    pub max_level: u32,
    pub name: &'static str,
}

/// Evolution stages from lowest to highest band.
pub const EVOLUTION_STAGES: [EvolutionStage; 5] = [
    EvolutionStage {
        min_level: 1,
        max_level: 5,
        name: "Kitten",
    },
    EvolutionStage {
        min_level: 6,
        max_level: 10,
        name: "Young Cat",
    },
    EvolutionStage {
        min_level: 11,
        max_level: 15,
        name: "Adult Cat",
    },
    EvolutionStage {
        min_level: 16,
        max_level: 20,
        name: "Elder Cat",
    },
    EvolutionStage {
        min_level: 21,
        max_level: LEVEL_CAP,
        name: "Legendary",
    },
];

/// The stage a level falls into.
pub fn stage_for_level(level: u32) -> &'static EvolutionStage {
    EVOLUTION_STAGES
        .iter()
        .find(|s| level >= s.min_level && level <= s.max_level)
        .unwrap_or(&EVOLUTION_STAGES[EVOLUTION_STAGES.len() - 1])
}

/// Abilities unlocked at or below a level, in catalog order.
pub fn unlocked_abilities(level: u32) -> Vec<&'static Ability> {
    ABILITIES.iter().filter(|a| a.unlock_level <= level).collect()
}

/// The next ability above a level, if any remain.
pub fn next_ability(level: u32) -> Option<&'static Ability> {
    ABILITIES.iter().find(|a| a.unlock_level > level)
}

/// A cat's derived progression state.
#[derive(Debug, Clone, Serialize)]
pub struct Progression {
    pub level: u32,
    /// XP accumulated inside the current level.
    pub xp_into_level: u64,
    /// XP needed to clear the current level.
    pub xp_to_next: u64,
    pub total_xp: u64,
    pub stage: &'static EvolutionStage,
    pub abilities: Vec<&'static Ability>,
}

/// In-memory XP ledger keyed by cat id.
#[derive(Debug, Default, Clone)]
pub struct ProgressionTracker {
    xp: HashMap<CatId, u64>,
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total XP a cat has earned. Unknown ids are level 1 with zero XP.
    pub fn total_xp(&self, id: CatId) -> u64 {
        self.xp.get(&id).copied().unwrap_or(0)
    }

    /// Add XP to a cat's ledger.
    pub fn add_xp(&mut self, id: CatId, amount: u64) {
        let total = self.xp.entry(id).or_insert(0);
        *total += amount;
        tracing::debug!(cat = id, amount, total = *total, "xp added");
    }

    /// Award battle XP and return the amount granted.
    pub fn award_battle_xp(&mut self, id: CatId, opponent_level: u32, won: bool) -> u64 {
        let amount = battle_xp(opponent_level, won);
        self.add_xp(id, amount);
        amount
    }

    /// Derive the full progression state for a cat.
    pub fn progress(&self, id: CatId) -> Progression {
        let total_xp = self.total_xp(id);

        let mut remaining = total_xp;
        let mut level = 1;
        let mut xp_to_next = xp_for_level(level);
        while remaining >= xp_to_next && level < LEVEL_CAP {
            remaining -= xp_to_next;
            level += 1;
            xp_to_next = xp_for_level(level);
        }

        Progression {
            level,
            xp_into_level: remaining,
            xp_to_next,
            total_xp,
            stage: stage_for_level(level),
            abilities: unlocked_abilities(level),
        }
    }
}
