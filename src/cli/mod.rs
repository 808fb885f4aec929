//! CLI command handlers.
//!
//! Headless, scriptable access to the generator and the configuration file.

pub mod common;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
