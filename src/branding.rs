//! Branding and application identity configuration.
//!
//! Centralizes names and paths so the binary, config directory and help
//! text stay in sync.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Password Generator";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "passgen";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "passgen";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PASSGEN_CONFIG_DIR";
