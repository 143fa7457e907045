//! Keybindings for the terminal quiz.
//!
//! Arrow keys and vim-style `j`/`k` move focus between options (wrapping,
//! like arrow keys on a focused option in the browser), Enter/Space select,
//! `n`/Tab and `p`/Shift+Tab move between questions.
//!
//! # Example
//!
//! ```
//! use conscious_choice::tui::keybindings::KeyBindings;
//! use conscious_choice::tui::Action;
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let bindings = KeyBindings::default();
//! let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
//! assert_eq!(bindings.resolve(&down), Some(Action::FocusNext));
//! ```

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;

/// Mapping from actions to the key events that trigger them.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    action_keys: HashMap<Action, Vec<KeyEvent>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let key = KeyEvent::new;
        let mut action_keys = HashMap::new();

        action_keys.insert(
            Action::FocusNext,
            vec![
                key(KeyCode::Down, none),
                key(KeyCode::Right, none),
                key(KeyCode::Char('j'), none),
            ],
        );
        action_keys.insert(
            Action::FocusPrevious,
            vec![
                key(KeyCode::Up, none),
                key(KeyCode::Left, none),
                key(KeyCode::Char('k'), none),
            ],
        );
        action_keys.insert(
            Action::Select,
            vec![key(KeyCode::Enter, none), key(KeyCode::Char(' '), none)],
        );
        action_keys.insert(
            Action::Advance,
            vec![key(KeyCode::Char('n'), none), key(KeyCode::Tab, none)],
        );
        action_keys.insert(
            Action::Back,
            vec![
                key(KeyCode::Char('p'), none),
                key(KeyCode::BackTab, KeyModifiers::SHIFT),
            ],
        );
        action_keys.insert(Action::Dismiss, vec![key(KeyCode::Esc, none)]);
        action_keys.insert(
            Action::Quit,
            vec![
                key(KeyCode::Char('q'), none),
                key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ],
        );

        Self { action_keys }
    }
}

impl KeyBindings {
    /// Resolve a key press to an action. Release and repeat events are
    /// ignored.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.action_keys
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| Self::key_matches(k, key)))
            .map(|(action, _)| *action)
    }

    /// Codes match; Shift is ignored for BackTab, which some terminals
    /// report without it.
    fn key_matches(target: &KeyEvent, actual: &KeyEvent) -> bool {
        if target.code != actual.code {
            return false;
        }
        if target.code == KeyCode::BackTab {
            return true;
        }
        target.modifiers == actual.modifiers
    }

    /// Keys bound to `action`.
    #[must_use]
    pub fn keys_for_action(&self, action: &Action) -> &[KeyEvent] {
        self.action_keys
            .get(action)
            .map_or(&[], |keys| keys.as_slice())
    }

    /// Display string for the first key bound to `action`.
    #[must_use]
    pub fn key_hint(&self, action: &Action) -> String {
        self.keys_for_action(action)
            .first()
            .map_or_else(String::new, Self::format_key)
    }

    /// Format a key event as a human-readable string.
    #[must_use]
    pub fn format_key(key: &KeyEvent) -> String {
        let name = match key.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => return "Shift+Tab".to_string(),
            _ => "?".to_string(),
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{name}")
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_option_navigation_keys() {
        let b = KeyBindings::default();
        assert_eq!(b.resolve(&press(KeyCode::Down)), Some(Action::FocusNext));
        assert_eq!(b.resolve(&press(KeyCode::Right)), Some(Action::FocusNext));
        assert_eq!(b.resolve(&press(KeyCode::Up)), Some(Action::FocusPrevious));
        assert_eq!(b.resolve(&press(KeyCode::Left)), Some(Action::FocusPrevious));
        assert_eq!(b.resolve(&press(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(b.resolve(&press(KeyCode::Char(' '))), Some(Action::Select));
    }

    #[test]
    fn test_question_navigation_keys() {
        let b = KeyBindings::default();
        assert_eq!(b.resolve(&press(KeyCode::Char('n'))), Some(Action::Advance));
        assert_eq!(b.resolve(&press(KeyCode::Tab)), Some(Action::Advance));
        assert_eq!(b.resolve(&press(KeyCode::BackTab)), Some(Action::Back));
        assert_eq!(
            b.resolve(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_quit_keys() {
        let b = KeyBindings::default();
        assert_eq!(b.resolve(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            b.resolve(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(b.resolve(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let b = KeyBindings::default();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(b.resolve(&key), None);
    }

    #[test]
    fn test_key_hint() {
        let b = KeyBindings::default();
        assert_eq!(b.key_hint(&Action::Select), "Enter");
        assert_eq!(b.key_hint(&Action::Dismiss), "Esc");
        assert_eq!(
            KeyBindings::format_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "Ctrl+c"
        );
    }
}
