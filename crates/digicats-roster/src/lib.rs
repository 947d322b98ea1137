//! Demo roster generation and the XP/evolution progression ledger.
//!
//! Neither module touches a wallclock or global RNG: roster cats are
//! derived deterministically from their id, and the progression tracker
//! is a plain in-memory ledger the caller owns.

pub mod demo;
pub mod progression;

pub use demo::{demo_cat, roster};
pub use progression::{Ability, AbilityKind, Progression, ProgressionTracker};

#[cfg(test)]
mod tests;
