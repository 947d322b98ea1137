//! Encounter snapshot — the visible battle state a frontend renders.

use serde::{Deserialize, Serialize};

use digicats_core::constants::MAX_HEALTH;
use digicats_core::CatId;

use crate::encounter::{BattlePhase, Encounter, Side};

/// Number of recent log lines carried by a snapshot.
pub const VIEW_LOG_LINES: usize = 5;

/// Display snapshot of an encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterView {
    pub player_id: CatId,
    pub opponent_id: CatId,
    pub phase: BattlePhase,
    pub turn: Side,
    pub player_health: u32,
    pub opponent_health: u32,
    pub max_health: u32,
    pub winner: Option<Side>,
    pub turns_resolved: usize,
    /// Most recent log lines, oldest first.
    pub log: Vec<String>,
}

impl EncounterView {
    pub fn from_encounter(encounter: &Encounter) -> EncounterView {
        let log = encounter.log();
        let tail = log.len().saturating_sub(VIEW_LOG_LINES);
        EncounterView {
            player_id: encounter.player().id,
            opponent_id: encounter.opponent().id,
            phase: encounter.phase(),
            turn: encounter.turn(),
            player_health: encounter.health(Side::Player),
            opponent_health: encounter.health(Side::Opponent),
            max_health: MAX_HEALTH,
            winner: encounter.winner(),
            turns_resolved: encounter.events().len(),
            log: log[tail..].to_vec(),
        }
    }
}
