//! TUI event handling with crossterm.
//!
//! Polls the terminal for input and translates key presses into
//! [`Action`]s through [`KeyBindings`]. Resize and mouse events are
//! consumed without producing an action; the next frame redraws anyway.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use thiserror::Error;

use super::keybindings::KeyBindings;
use super::Action;

/// Error reading terminal events.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to read terminal event: {0}")]
    Read(#[from] std::io::Error),
}

/// Translates terminal events into actions.
#[derive(Debug, Clone, Default)]
pub struct EventHandler {
    bindings: KeyBindings,
}

impl EventHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Wait up to `timeout` for an event and translate it.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Read`] if the terminal cannot be read.
    pub fn poll(&self, timeout: Duration) -> Result<Option<Action>, EventError> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(self.translate(&event::read()?))
    }

    /// Translate one event.
    #[must_use]
    pub fn translate(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.translate_key(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn translate_key(&self, key: &KeyEvent) -> Option<Action> {
        let action = self.bindings.resolve(key);
        if action.is_none() {
            log::trace!("Unbound key: {:?}", key.code);
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_translate_key_event() {
        let handler = EventHandler::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(handler.translate(&event), Some(Action::Advance));
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let handler = EventHandler::new();
        assert_eq!(handler.translate(&Event::Resize(80, 24)), None);
        assert_eq!(handler.translate(&Event::FocusGained), None);
    }
}
