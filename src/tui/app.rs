//! TUI application state management.
//!
//! # Overview
//!
//! [`App`] wraps one module page view: the rendered [`Document`] and its
//! [`QuizController`]. Keyboard actions are translated into the same
//! controller calls a browser would make (option keydown, navigation
//! buttons, the follow-on button), so the terminal quiz and the rendered
//! page share one state machine.
//!
//! # Modes
//!
//! - `Answering`: a question is displayed
//! - `Notice`: a blocking notice (such as "nothing selected") is shown
//! - `Completed`: the completion card is displayed
//! - `Quitting`: the run loop should stop; see [`App::outcome`]
//!
//! # Example
//!
//! ```
//! use conscious_choice::content::{Module, Question, QuizOption};
//! use conscious_choice::page::skeleton;
//! use conscious_choice::quiz::QuizController;
//! use conscious_choice::tui::app::{Action, App, AppMode};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let module = Module {
//!     id: 1,
//!     title: "Honesty".into(),
//!     subtitle: String::new(),
//!     description: String::new(),
//!     completion_message: String::new(),
//!     questions: vec![Question {
//!         title: "Q".into(),
//!         scenario: "S".into(),
//!         question: "?".into(),
//!         options: vec![QuizOption { text: "a".into(), correct: true, feedback: String::new() }],
//!         resources: vec![],
//!     }],
//! };
//! let mut doc = skeleton::module_page();
//! let quiz = QuizController::mount(&mut doc, module, 1, 7, &mut StdRng::seed_from_u64(0));
//! let mut app = App::new(doc, quiz);
//!
//! app.handle_action(Action::Advance);
//! assert_eq!(app.mode(), AppMode::Notice);
//! app.handle_action(Action::Dismiss);
//! app.handle_action(Action::Select);
//! app.handle_action(Action::Advance);
//! assert_eq!(app.mode(), AppMode::Completed);
//! ```

use crate::dom::Document;
use crate::quiz::{FollowOn, OptionKey, QuizController, QuizError, Transition};

use super::theme::Theme;

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// A question is displayed
    #[default]
    Answering,
    /// A blocking notice is displayed over the question
    Notice,
    /// The completion card is displayed
    Completed,
    /// The application is quitting
    Quitting,
}

impl AppMode {
    /// Check if the application is done (quitting).
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Quitting)
    }
}

/// User action triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Focus the next option (wraps)
    FocusNext,
    /// Focus the previous option (wraps)
    FocusPrevious,
    /// Select the focused option; on the completion card, follow on
    Select,
    /// Next question, or complete the module on the last one
    Advance,
    /// Previous question, or back to the module list on the first one
    Back,
    /// Close the notice
    Dismiss,
    /// Quit the application
    Quit,
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "focus_next" => Ok(Self::FocusNext),
            "focus_previous" => Ok(Self::FocusPrevious),
            "select" => Ok(Self::Select),
            "advance" | "next" => Ok(Self::Advance),
            "back" | "previous" => Ok(Self::Back),
            "dismiss" => Ok(Self::Dismiss),
            "quit" => Ok(Self::Quit),
            _ => Err(format!("unknown action '{s}'")),
        }
    }
}

/// Where the user asked to go when the app stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Load this module next
    Module(u32),
    /// Leave for the homepage (or its module list)
    Home,
    /// Quit without navigating
    Quit,
}

/// TUI state for one module page view.
#[derive(Debug)]
pub struct App {
    document: Document,
    quiz: QuizController,
    mode: AppMode,
    /// Mode to return to when the notice is dismissed
    notice_return: AppMode,
    notice: Option<String>,
    outcome: Option<Outcome>,
    theme: Theme,
}

impl App {
    /// Wrap a mounted module page.
    #[must_use]
    pub fn new(document: Document, quiz: QuizController) -> Self {
        Self {
            document,
            quiz,
            mode: AppMode::Answering,
            notice_return: AppMode::Answering,
            notice: None,
            outcome: None,
            theme: Theme::default(),
        }
    }

    /// Use a different color palette.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.mode.is_done()
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizController {
        &self.quiz
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Notice text while in [`AppMode::Notice`].
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Navigation requested on quit, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Display position of the focused option on the current question.
    #[must_use]
    pub fn focused_position(&self) -> Option<usize> {
        self.quiz
            .focused_option(&self.document)
            .filter(|(question, _)| *question == self.quiz.current_index())
            .map(|(_, position)| position)
    }

    /// Show a blocking notice over the current mode.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        if self.mode != AppMode::Notice {
            self.notice_return = self.mode;
        }
        self.notice = Some(message.into());
        self.mode = AppMode::Notice;
    }

    /// Report that the follow-on module could not be opened.
    pub fn follow_on_failed(&mut self, message: impl Into<String>) {
        self.outcome = None;
        self.mode = AppMode::Completed;
        self.show_notice(message);
    }

    /// Handle a user action.
    ///
    /// Returns `true` if the action changed the state.
    pub fn handle_action(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            self.quit(Outcome::Quit);
            return true;
        }

        match self.mode {
            AppMode::Notice => self.handle_notice_action(action),
            AppMode::Answering => self.handle_answering_action(action),
            AppMode::Completed => self.handle_completed_action(action),
            AppMode::Quitting => false,
        }
    }

    fn handle_notice_action(&mut self, action: Action) -> bool {
        match action {
            Action::Dismiss | Action::Select => {
                self.notice = None;
                self.mode = self.notice_return;
                true
            }
            _ => false,
        }
    }

    fn handle_answering_action(&mut self, action: Action) -> bool {
        let result = match action {
            Action::FocusNext => self.key(OptionKey::Next),
            Action::FocusPrevious => self.key(OptionKey::Previous),
            Action::Select => self.key(OptionKey::Activate),
            Action::Advance => self.quiz.advance(&mut self.document).map(|t| self.apply(t)),
            Action::Back => self.quiz.previous(&mut self.document).map(|t| self.apply(t)),
            Action::Dismiss | Action::Quit => Ok(false),
        };

        match result {
            Ok(changed) => changed,
            Err(e) if e.is_notice() => {
                self.show_notice(e.to_string());
                true
            }
            Err(e) => {
                log::debug!("Action {:?} rejected: {}", action, e);
                false
            }
        }
    }

    fn handle_completed_action(&mut self, action: Action) -> bool {
        match action {
            Action::Select | Action::Advance => {
                let outcome = match self.quiz.follow_on() {
                    FollowOn::NextModule(id) => Outcome::Module(id),
                    FollowOn::Home => Outcome::Home,
                };
                self.quit(outcome);
                true
            }
            _ => false,
        }
    }

    fn key(&mut self, key: OptionKey) -> Result<bool, QuizError> {
        self.quiz.on_keydown(&mut self.document, key)
    }

    fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Question(_) => {}
            Transition::Completed(_) => self.mode = AppMode::Completed,
            Transition::Navigate(target) => {
                log::debug!("Leaving quiz for {}", target);
                self.quit(Outcome::Home);
            }
        }
        true
    }

    fn quit(&mut self, outcome: Outcome) {
        log::debug!("Quitting with {:?}", outcome);
        self.outcome = Some(outcome);
        self.mode = AppMode::Quitting;
    }
}
