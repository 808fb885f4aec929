//! Configuration management CLI commands.

use crate::branding::APP_BINARY_NAME;
use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode, MAX_CLIPBOARD_CLEAR_SECS};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Seconds before a copied password is cleared (0 disables)
    #[arg(long, value_name = "SECS")]
    clipboard_clear_secs: Option<u64>,

    /// Show or hide the key hint line
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
    clipboard: ClipboardOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help: bool,
}

#[derive(Serialize, Debug)]
struct ClipboardOutput {
    clear_after_secs: u64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;

        let output = ConfigOutput {
            path: path.to_string_lossy().to_string(),
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str().to_string(),
                show_help: config.ui.show_help,
            },
            clipboard: ClipboardOutput {
                clear_after_secs: config.clipboard.clear_after_secs,
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none() && self.clipboard_clear_secs.is_none() && self.show_help.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --clipboard-clear-secs, or --show-help",
            ));
        }

        // A file that fails to load is left untouched
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(secs) = self.clipboard_clear_secs {
            if secs > MAX_CLIPBOARD_CLEAR_SECS {
                return Err(CliError::validation(format!(
                    "Clipboard clear delay must be at most {MAX_CLIPBOARD_CLEAR_SECS} seconds"
                )));
            }
            config.clipboard.clear_after_secs = secs;
        }

        if let Some(show_help) = self.show_help {
            config.ui.show_help = show_help;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let heading = format!("{APP_BINARY_NAME} Configuration");
    println!("{heading}");
    println!("{}", "=".repeat(heading.len()));
    println!();
    println!("File: {}", output.path);
    println!();
    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Show Help:  {}", output.ui.show_help);
    println!();
    println!("Clipboard:");
    if output.clipboard.clear_after_secs == 0 {
        println!("  Clear After: never");
    } else {
        println!("  Clear After: {}s", output.clipboard.clear_after_secs);
    }
}
