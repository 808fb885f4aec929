//! Data models for password generation.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and random source.

pub mod character_class;
pub mod options;
pub mod pool;

// Re-export all model types
pub use character_class::CharacterClass;
pub use options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};
pub use pool::{estimate_entropy_bits, CharacterPool};
