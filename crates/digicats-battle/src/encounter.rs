//! Encounter state machine: `Ready -> Battling -> Ended`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use digicats_core::constants::MAX_HEALTH;
use digicats_core::Cat;

use crate::errors::BattleError;
use crate::resolve::{resolve_attack, AttackRolls};
use crate::state::EncounterView;

/// One side of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Log label for this side's cat.
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Your cat",
            Side::Opponent => "Enemy",
        }
    }
}

/// Encounter lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Combatants staged, battle not started.
    #[default]
    Ready,
    /// Turns alternating.
    Battling,
    /// One side reached zero health. Terminal; no further turns.
    Ended,
}

/// Outcome of one attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Hit,
    Critical,
    Miss,
}

/// Structured record of one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Which side attacked.
    pub side: Side,
    pub outcome: AttackOutcome,
    /// Final damage applied (0 on a miss).
    pub damage: u32,
    /// Defender health after the damage was applied.
    pub defender_health: u32,
}

/// One battle session between two cats.
///
/// The combatants are read-only inputs; all mutable state (health, turn,
/// phase, log) lives here. No hidden singletons and no system clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    player: Cat,
    opponent: Cat,
    player_health: u32,
    opponent_health: u32,
    turn: Side,
    phase: BattlePhase,
    winner: Option<Side>,
    /// Caller-visible re-entrancy gate: while set, no turn may resolve.
    animating: bool,
    events: Vec<TurnEvent>,
    log: Vec<String>,
}

impl Encounter {
    /// Stage an encounter in the `Ready` phase with full health on both
    /// sides. Rejects combatants that fail shape validation.
    pub fn new(player: Cat, opponent: Cat, first_side: Side) -> Result<Encounter, BattleError> {
        player.validate()?;
        opponent.validate()?;
        Ok(Encounter {
            player,
            opponent,
            player_health: MAX_HEALTH,
            opponent_health: MAX_HEALTH,
            turn: first_side,
            phase: BattlePhase::Ready,
            winner: None,
            animating: false,
            events: Vec::new(),
            log: Vec::new(),
        })
    }

    /// Start the battle: `Ready -> Battling`.
    pub fn start(&mut self) -> Result<(), BattleError> {
        if self.phase != BattlePhase::Ready {
            return Err(BattleError::NotReady { phase: self.phase });
        }
        self.phase = BattlePhase::Battling;
        self.log.push("Battle started!".to_string());
        tracing::debug!(player = self.player.id, opponent = self.opponent.id, "battle started");
        Ok(())
    }

    /// Resolve one attack for `side`.
    ///
    /// Rejected (with no state change) unless the encounter is in
    /// `Battling`, no resolution is in flight, and it is `side`'s turn.
    /// On a fatal blow the encounter transitions to `Ended` and the
    /// attacker is declared winner; otherwise the turn passes.
    pub fn resolve_turn(
        &mut self,
        side: Side,
        rng: &mut impl Rng,
    ) -> Result<TurnEvent, BattleError> {
        if self.phase != BattlePhase::Battling {
            return Err(BattleError::NotBattling { phase: self.phase });
        }
        if self.animating {
            return Err(BattleError::ResolutionInFlight);
        }
        if side != self.turn {
            return Err(BattleError::OutOfTurn {
                side,
                expected: self.turn,
            });
        }

        let (attacker, defender) = match side {
            Side::Player => (&self.player, &self.opponent),
            Side::Opponent => (&self.opponent, &self.player),
        };

        let rolls = AttackRolls::draw(rng);
        let (outcome, damage) = resolve_attack(attacker, defender, &rolls);

        let defender_health = match side {
            Side::Player => {
                self.opponent_health = self.opponent_health.saturating_sub(damage);
                self.opponent_health
            }
            Side::Opponent => {
                self.player_health = self.player_health.saturating_sub(damage);
                self.player_health
            }
        };

        match outcome {
            AttackOutcome::Miss => self.log.push(format!("{} missed!", side.label())),
            AttackOutcome::Hit => self
                .log
                .push(format!("{} deals {damage} damage!", side.label())),
            AttackOutcome::Critical => self
                .log
                .push(format!("{} deals {damage} damage! CRITICAL!", side.label())),
        }

        let event = TurnEvent {
            side,
            outcome,
            damage,
            defender_health,
        };
        self.events.push(event);
        tracing::debug!(?side, ?outcome, damage, defender_health, "turn resolved");

        if defender_health == 0 {
            // Only the defender's health changes on a turn, so the
            // attacker always survives: the attacker of the fatal blow
            // is the winner.
            self.phase = BattlePhase::Ended;
            self.winner = Some(side);
            self.log.push(format!("{} wins!", side.label()));
            tracing::debug!(winner = ?side, "battle ended");
        } else {
            self.turn = side.opposite();
        }

        Ok(event)
    }

    /// Mark a presentation animation as in flight. While set,
    /// `resolve_turn` rejects with `ResolutionInFlight`.
    pub fn begin_animation(&mut self) {
        self.animating = true;
    }

    /// Clear the animation gate.
    pub fn end_animation(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Whose turn it is next (meaningless once `Ended`).
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Current health for a side.
    pub fn health(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_health,
            Side::Opponent => self.opponent_health,
        }
    }

    pub fn player(&self) -> &Cat {
        &self.player
    }

    pub fn opponent(&self) -> &Cat {
        &self.opponent
    }

    /// All resolved turn events, oldest first.
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// Human-readable battle log, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Build a display snapshot of the current state.
    pub fn snapshot(&self) -> EncounterView {
        EncounterView::from_encounter(self)
    }

    /// Force a side's health (for tests that need a staged endgame).
    #[cfg(test)]
    pub fn set_health(&mut self, side: Side, health: u32) {
        match side {
            Side::Player => self.player_health = health,
            Side::Opponent => self.opponent_health = health,
        }
    }
}
