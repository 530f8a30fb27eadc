//! UI state - status bar and transient messages

use super::status_bar::{StatusBar, TransientMessage};
use std::time::{Duration, Instant};

/// UI state - status bar segments and the current transient message
#[derive(Debug, Clone)]
pub struct UiState {
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
            transient_message: None,
        }
    }

    /// Show `text` until `duration` elapses, replacing any current message
    pub fn set_transient(&mut self, text: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(text, duration));
    }

    /// Text of the live transient message, if any
    pub fn transient_text(&self) -> Option<&str> {
        self.transient_message.as_ref().map(|m| m.text.as_str())
    }

    /// Drop the transient message once expired
    /// Returns true if it was removed (needs redraw)
    pub fn expire_transient(&mut self, now: Instant) -> bool {
        match &self.transient_message {
            Some(msg) if msg.is_expired_at(now) => {
                self.transient_message = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
