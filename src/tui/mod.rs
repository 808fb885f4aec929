//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets rendered with Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod clipboard;
pub mod component;
pub mod generator_form;
pub mod help_overlay;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;

// Re-export TUI components
pub use clipboard::{ClipboardBackend, PasswordClipboard, SystemClipboard};
pub use component::Component;
pub use generator_form::{FormRow, GeneratorForm, GeneratorFormEvent};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the generator screen.
pub struct AppState<B = SystemClipboard> {
    /// The generator form
    pub form: GeneratorForm,
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Clipboard with auto-clear
    pub clipboard: PasswordClipboard<B>,
    /// Last status message
    pub status_message: String,
    /// Last error message (cleared by the next action)
    pub error_message: Option<String>,
    /// Help overlay visible
    pub show_help: bool,
    /// Exit requested
    pub should_quit: bool,
}

impl AppState<SystemClipboard> {
    /// Creates state backed by the system clipboard.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let clipboard = PasswordClipboard::system(config.clipboard.clear_after_secs);
        Self::with_clipboard(config, clipboard)
    }
}

impl<B: ClipboardBackend> AppState<B> {
    /// Creates state with an explicit clipboard (used by tests).
    pub fn with_clipboard(config: Config, clipboard: PasswordClipboard<B>) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            form: GeneratorForm::new(),
            config,
            theme,
            clipboard,
            status_message: "Enter a length and press Ctrl+S to generate".to_string(),
            error_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Applies an event emitted by the form.
    pub fn apply_form_event(&mut self, event: GeneratorFormEvent) {
        match event {
            GeneratorFormEvent::Generated {
                length,
                entropy_bits,
            } => {
                info!(length, "password generated");
                self.set_status(format!(
                    "Generated a {length} character password (~{entropy_bits:.0} bits)"
                ));
            }
            GeneratorFormEvent::SubmitBlocked => {
                self.set_error("Fix the highlighted fields before generating");
            }
            GeneratorFormEvent::Reset => {
                self.set_status("Form reset");
            }
            GeneratorFormEvent::CopyRequested(password) => match self.clipboard.copy(&password) {
                Ok(message) => self.set_status(message),
                Err(e) => self.set_error(format!("Failed to copy to clipboard: {e:#}")),
            },
            GeneratorFormEvent::NothingToCopy => {
                self.set_error("Nothing to copy yet, generate a password first");
            }
            GeneratorFormEvent::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            GeneratorFormEvent::Quit => {
                self.should_quit = true;
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: ClipboardBackend>(
    state: &mut AppState<B>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("starting generator UI");
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.clipboard.tick() {
            state.set_status("Clipboard cleared");
        }

        if state.should_quit {
            break;
        }
    }

    debug!("generator UI closed");
    Ok(())
}

/// Routes one key press. Returns `Ok(true)` when the app should exit.
pub fn handle_key_event<B: ClipboardBackend>(
    state: &mut AppState<B>,
    key: event::KeyEvent,
) -> Result<bool> {
    // Windows terminals report key releases too
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
            state.show_help = false;
        }
        return Ok(false);
    }

    if let Some(event) = state.form.handle_input(key) {
        state.apply_form_event(event);
    }

    Ok(state.should_quit)
}

/// Render the UI from current state
fn render<B: ClipboardBackend>(f: &mut Frame, state: &AppState<B>) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let status_height = if state.config.ui.show_help { 4 } else { 3 };
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(status_height)])
        .split(f.area());

    state.form.render(f, chunks[0], &state.theme);
    StatusBar::render(f, chunks[1], state, &state.theme);

    if state.show_help {
        HelpOverlay::render(f, f.area(), &state.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::ThemeMode;

    /// Clipboard kept in memory; clones share the same text.
    #[derive(Debug, Default, Clone)]
    struct MemoryClipboard {
        text: Rc<RefCell<String>>,
    }

    impl ClipboardBackend for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            *self.text.borrow_mut() = text.to_string();
            Ok(())
        }

        fn get_text(&mut self) -> Result<String> {
            Ok(self.text.borrow().clone())
        }
    }

    fn test_state() -> (AppState<MemoryClipboard>, MemoryClipboard) {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        let memory = MemoryClipboard::default();
        let clipboard =
            PasswordClipboard::with_backend(memory.clone(), config.clipboard.clear_after_secs);
        (AppState::with_clipboard(config, clipboard), memory)
    }

    fn press(state: &mut AppState<MemoryClipboard>, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn generate(state: &mut AppState<MemoryClipboard>, length: &str) {
        for c in length.chars() {
            press(state, KeyCode::Char(c));
        }
        handle_key_event(
            state,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        )
        .unwrap();
    }

    #[test]
    fn test_generate_sets_status() {
        let (mut state, _) = test_state();
        generate(&mut state, "12");

        assert!(state.form.state().password().is_some());
        assert!(state.status_message.starts_with("Generated a 12 character password"));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_blocked_submit_sets_error() {
        let (mut state, _) = test_state();
        generate(&mut state, "2");

        assert!(state.form.state().password().is_none());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_copy_writes_password_to_clipboard() {
        let (mut state, memory) = test_state();
        generate(&mut state, "10");
        let password = state.form.state().password().unwrap().as_str().to_string();

        press(&mut state, KeyCode::Char('c'));

        assert_eq!(*memory.text.borrow(), password);
        assert_eq!(
            state.status_message,
            "Copied password to clipboard for 40 seconds"
        );
        assert!(state.clipboard.has_pending_clear());
    }

    #[test]
    fn test_copy_before_generating_is_an_error() {
        let (mut state, memory) = test_state();
        state.apply_form_event(GeneratorFormEvent::NothingToCopy);

        assert!(state.error_message.is_some());
        assert!(memory.text.borrow().is_empty());
        assert!(!state.clipboard.has_pending_clear());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let (mut state, _) = test_state();
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);

        // Digits would otherwise land in the length field
        press(&mut state, KeyCode::Char('7'));
        assert_eq!(state.form.state().length_input(), "");
        assert!(state.show_help);

        // q closes help instead of quitting
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(!state.show_help);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit_ends_loop() {
        let (mut state, _) = test_state();
        assert!(press(&mut state, KeyCode::Esc));
        assert!(state.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let (mut state, _) = test_state();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert!(!handle_key_event(&mut state, release).unwrap());
        assert_eq!(state.form.state().length_input(), "");
    }

    #[test]
    fn test_reset_event_sets_status() {
        let (mut state, _) = test_state();
        generate(&mut state, "8");
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert!(state.form.state().password().is_none());
        assert_eq!(state.status_message, "Form reset");
    }
}
