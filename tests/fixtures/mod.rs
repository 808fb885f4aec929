//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use passgen::config::Config;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the passgen binary
pub fn passgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_passgen")
}

/// Creates a Command whose config directory points at `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(passgen_bin());
    cmd.env("PASSGEN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs passgen with a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `config` into `config_dir` the same way the app does.
pub fn write_config(config: &Config, config_dir: &Path) {
    config
        .save_to(&config_dir.join("config.toml"))
        .expect("Failed to write config");
}

/// Stdout split into non-empty lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
