//! Error taxonomy for entity validation.

use thiserror::Error;

/// An entity failed shape validation. Engines reject the operation
/// without touching any state when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// A combat stat is outside its valid range.
    #[error("{stat} value {value} outside valid range {min}..={max}")]
    StatOutOfRange {
        stat: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    /// A cosmetic trait index does not exist in its palette.
    #[error("unknown {dimension} index {index} (palette size {palette_size})")]
    UnknownPaletteIndex {
        dimension: &'static str,
        index: u8,
        palette_size: u8,
    },
}
