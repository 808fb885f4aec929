//! System clipboard access for generated passwords.
//!
//! Copies go through a [`ClipboardBackend`] so the auto-clear timing can be
//! tested without a display server. After the configured delay the clipboard
//! is wiped, but only if it still holds the password we put there.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Minimal clipboard interface.
pub trait ClipboardBackend {
    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str) -> Result<()>;
    /// Read the clipboard text.
    fn get_text(&mut self) -> Result<String>;
}

/// System clipboard via `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .context("Failed to write to clipboard")
    }

    fn get_text(&mut self) -> Result<String> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.get_text())
            .context("Failed to read clipboard")
    }
}

/// A copy waiting to be cleared.
#[derive(Debug, Clone)]
struct PendingClear {
    text: String,
    copied_at: Instant,
}

/// Tracks the last copied password and clears it when it expires.
#[derive(Debug)]
pub struct PasswordClipboard<B = SystemClipboard> {
    backend: B,
    clear_after: Option<Duration>,
    pending: Option<PendingClear>,
}

impl PasswordClipboard<SystemClipboard> {
    /// System clipboard with the given auto-clear delay in seconds (0 disables it).
    #[must_use]
    pub fn system(clear_after_secs: u64) -> Self {
        Self::with_backend(SystemClipboard, clear_after_secs)
    }
}

impl<B: ClipboardBackend> PasswordClipboard<B> {
    /// Wraps a backend.
    pub fn with_backend(backend: B, clear_after_secs: u64) -> Self {
        Self {
            backend,
            clear_after: (clear_after_secs > 0).then(|| Duration::from_secs(clear_after_secs)),
            pending: None,
        }
    }

    /// Copies `password` and returns a status message.
    pub fn copy(&mut self, password: &str) -> Result<String> {
        self.copy_at(password, Instant::now())
    }

    fn copy_at(&mut self, password: &str, now: Instant) -> Result<String> {
        self.backend.set_text(password)?;
        debug!("copied password to clipboard");

        match self.clear_after {
            Some(delay) => {
                self.pending = Some(PendingClear {
                    text: password.to_string(),
                    copied_at: now,
                });
                Ok(format!(
                    "Copied password to clipboard for {} seconds",
                    delay.as_secs()
                ))
            }
            None => {
                self.pending = None;
                Ok("Copied password to clipboard".to_string())
            }
        }
    }

    /// True while a copied password is waiting to be cleared.
    #[must_use]
    pub const fn has_pending_clear(&self) -> bool {
        self.pending.is_some()
    }

    /// Clears the clipboard if the delay has elapsed.
    ///
    /// Returns `true` when the clipboard was wiped on this call.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        let (Some(delay), Some(pending)) = (self.clear_after, self.pending.as_ref()) else {
            return false;
        };
        if now.duration_since(pending.copied_at) < delay {
            return false;
        }

        let pending = self.pending.take();
        let still_ours = match self.backend.get_text() {
            Ok(current) => pending.is_some_and(|p| p.text == current),
            Err(e) => {
                warn!("could not read clipboard before clearing: {e:#}");
                false
            }
        };
        if !still_ours {
            return false;
        }

        match self.backend.set_text("") {
            Ok(()) => {
                debug!("cleared copied password from clipboard");
                true
            }
            Err(e) => {
                warn!("could not clear clipboard: {e:#}");
                false
            }
        }
    }
}
