//! Integration tests for keybindings driving the terminal quiz.
//!
//! These verify the full path from key events through [`EventHandler`]
//! to [`App`] state.

use conscious_choice::content::{Module, Question, QuizOption};
use conscious_choice::page::skeleton;
use conscious_choice::quiz::QuizController;
use conscious_choice::tui::app::{Action, App, AppMode, Outcome};
use conscious_choice::tui::events::EventHandler;
use conscious_choice::tui::keybindings::KeyBindings;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// Helper Functions
// =============================================================================

/// Create a key press event for testing.
fn key_press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Create a key release event for testing.
fn key_release(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }
}

fn app(id: u32, questions: usize) -> App {
    let module = Module {
        id,
        title: "Compassion".to_string(),
        subtitle: String::new(),
        description: String::new(),
        completion_message: "Done".to_string(),
        questions: (0..questions)
            .map(|q| Question {
                title: format!("Q{q}"),
                scenario: "S".to_string(),
                question: "?".to_string(),
                options: vec![
                    QuizOption {
                        text: "a".to_string(),
                        correct: true,
                        feedback: String::new(),
                    },
                    QuizOption {
                        text: "b".to_string(),
                        correct: false,
                        feedback: String::new(),
                    },
                ],
                resources: vec![],
            })
            .collect(),
    };
    let mut doc = skeleton::module_page();
    let quiz = QuizController::mount(&mut doc, module, id, 7, &mut StdRng::seed_from_u64(0));
    App::new(doc, quiz)
}

/// Feed keys through the event handler into the app.
fn press(app: &mut App, handler: &EventHandler, keys: &[KeyCode]) {
    for &code in keys {
        let event = Event::Key(key_press(code, KeyModifiers::NONE));
        if let Some(action) = handler.translate(&event) {
            app.handle_action(action);
        }
    }
}

// =============================================================================
// Default Bindings
// =============================================================================

#[test]
fn test_default_bindings_cover_every_action() {
    let bindings = KeyBindings::default();
    for action in [
        Action::FocusNext,
        Action::FocusPrevious,
        Action::Select,
        Action::Advance,
        Action::Back,
        Action::Dismiss,
        Action::Quit,
    ] {
        assert!(
            !bindings.keys_for_action(&action).is_empty(),
            "{:?} has no key",
            action
        );
    }
}

#[test]
fn test_release_events_are_ignored() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.resolve(&key_release(KeyCode::Enter)), None);
    assert_eq!(
        bindings.resolve(&key_press(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Action::Select)
    );
}

#[test]
fn test_ctrl_c_quits_but_plain_c_does_not() {
    let bindings = KeyBindings::default();
    assert_eq!(
        bindings.resolve(&key_press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(
        bindings.resolve(&key_press(KeyCode::Char('c'), KeyModifiers::NONE)),
        None
    );
}

#[test]
fn test_backtab_with_or_without_shift() {
    let bindings = KeyBindings::default();
    assert_eq!(
        bindings.resolve(&key_press(KeyCode::BackTab, KeyModifiers::NONE)),
        Some(Action::Back)
    );
    assert_eq!(
        bindings.resolve(&key_press(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Action::Back)
    );
}

// =============================================================================
// Full Flow
// =============================================================================

#[test]
fn test_keyboard_walkthrough_to_next_module() {
    let handler = EventHandler::new();
    let mut app = app(2, 2);

    press(&mut app, &handler, &[KeyCode::Char('n')]);
    assert_eq!(app.mode(), AppMode::Notice);
    press(&mut app, &handler, &[KeyCode::Esc]);
    assert_eq!(app.mode(), AppMode::Answering);

    press(&mut app, &handler, &[KeyCode::Down, KeyCode::Enter, KeyCode::Tab]);
    assert_eq!(app.quiz().current_index(), 1);
    assert_eq!(app.quiz().selection(0), Some(1));

    press(&mut app, &handler, &[KeyCode::Char(' '), KeyCode::Char('n')]);
    assert_eq!(app.mode(), AppMode::Completed);

    press(&mut app, &handler, &[KeyCode::Enter]);
    assert!(app.should_quit());
    assert_eq!(app.outcome(), Some(&Outcome::Module(3)));
}

#[test]
fn test_back_from_first_question_leaves_for_home() {
    let handler = EventHandler::new();
    let mut app = app(1, 2);

    press(&mut app, &handler, &[KeyCode::Char('p')]);
    assert!(app.should_quit());
    assert_eq!(app.outcome(), Some(&Outcome::Home));
}

#[test]
fn test_quit_from_notice() {
    let handler = EventHandler::new();
    let mut app = app(1, 1);

    press(&mut app, &handler, &[KeyCode::Char('n'), KeyCode::Char('q')]);
    assert!(app.should_quit());
    assert_eq!(app.outcome(), Some(&Outcome::Quit));
}
