use anyhow::Result;
use tracing::warn;

use crate::{config, tui};

/// Loads configuration and runs the generator screen until the user quits.
///
/// A broken config file does not stop the app: defaults are used and the
/// problem is shown in the status bar.
pub fn run_generator_terminal() -> Result<()> {
    let (config, load_error) = match config::Config::load() {
        Ok(config) => (config, None),
        Err(e) => {
            warn!("falling back to default configuration: {e:#}");
            (config::Config::default(), Some(e))
        }
    };

    let mut app_state = tui::AppState::new(config);
    if let Some(e) = load_error {
        app_state.set_error(format!("Failed to load config, using defaults: {e:#}"));
    }

    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal even when the loop failed
    tui::restore_terminal(terminal)?;

    result
}
