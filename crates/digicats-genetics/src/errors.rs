//! Genetics engine error taxonomy.

use thiserror::Error;

use digicats_core::EntityError;

/// A genetics operation was rejected before consuming any randomness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneticsError {
    /// A parent failed shape validation.
    #[error(transparent)]
    InvalidEntity(#[from] EntityError),
}
