//! Battle engine for DigiCats.
//!
//! Resolves turn-based encounters between two cats: alternating turns,
//! a damage formula with miss/critical rolls, and a terminal win state.
//! Completely headless and deterministic given a seeded RNG.

pub mod encounter;
pub mod errors;
pub mod resolve;
pub mod state;

pub use digicats_core as core;
pub use encounter::{AttackOutcome, BattlePhase, Encounter, Side, TurnEvent};
pub use errors::BattleError;

#[cfg(test)]
mod tests;
