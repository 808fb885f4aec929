//! Application orchestration layer
//!
//! High-level functions that coordinate configuration, logging and the TUI
//! without containing detailed implementation logic.

/// Generator screen startup and teardown
pub mod launch;

// Re-export commonly used functions for convenience
pub use launch::run_generator_terminal;
