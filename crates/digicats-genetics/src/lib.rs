//! Genetics engine for DigiCats.
//!
//! Three entry points over a pair of parent cats: a display-only trait
//! probability preview, committed breeding (one concrete offspring), and
//! the fusion variant (a guaranteed-Legendary result with an extended
//! stat ceiling). All randomness comes through an injected `Rng`.

pub mod abilities;
pub mod breeding;
pub mod errors;
pub mod fusion;
pub mod preview;

pub use digicats_core as core;
pub use breeding::breed;
pub use errors::GeneticsError;
pub use fusion::{fuse, FusedCat};
pub use preview::{preview, OffspringPreview};
