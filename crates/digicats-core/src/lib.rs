//! Core types and definitions for the DigiCats simulation.
//!
//! This crate defines the vocabulary shared across the engine crates:
//! the cat entity model, rarity classification, trait palettes, tuning
//! constants, and the error taxonomy. It has no dependency on any
//! engine or runtime framework.

pub mod constants;
pub mod entity;
pub mod errors;
pub mod rarity;

pub use entity::{Cat, CatId};
pub use errors::EntityError;
pub use rarity::{classify_rarity, RarityTier};
