//! Password Generator Library
//!
//! Core functionality for the `passgen` application: character classes and
//! pools, length and class validation, random password generation, the
//! immutable form state behind the terminal UI, and configuration.

// Module declarations
pub mod app;
pub mod branding;
pub mod cli;
pub mod config;
pub mod form;
pub mod generator;
pub mod logging;
pub mod models;
pub mod tui;
pub mod validation;
