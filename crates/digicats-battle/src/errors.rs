//! Battle engine error taxonomy.

use thiserror::Error;

use digicats_core::EntityError;

use crate::encounter::{BattlePhase, Side};

/// A battle operation was rejected. The encounter state is untouched
/// whenever one of these is returned; there is no partial turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// `start` called outside the `Ready` phase.
    #[error("encounter cannot start from the {phase:?} phase")]
    NotReady { phase: BattlePhase },

    /// Attack attempted outside the `Battling` phase.
    #[error("encounter is not battling (current phase: {phase:?})")]
    NotBattling { phase: BattlePhase },

    /// A resolution is already in flight for this encounter.
    #[error("a turn resolution is already in flight")]
    ResolutionInFlight,

    /// Attack attempted by the side whose turn it is not.
    #[error("{side:?} attacked out of turn (expected {expected:?})")]
    OutOfTurn { side: Side, expected: Side },

    /// A combatant failed shape validation.
    #[error(transparent)]
    InvalidEntity(#[from] EntityError),
}
