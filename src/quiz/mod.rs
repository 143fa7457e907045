//! Module quiz: rendering and navigation state.
//!
//! # Overview
//!
//! - [`controller`]: the [`QuizController`] state machine over
//!   `{current question, completed}`
//! - [`view`]: question card markup
//! - [`shuffle`]: pure option shuffling
//!
//! # State Machine
//!
//! ```text
//!   Question(0) <-> Question(1) <-> ... <-> Question(n-1) --complete--> Completed
//! ```
//!
//! Moving forward or completing requires a selection on the displayed
//! question; otherwise a [`QuizError::NothingSelected`] notice is raised and
//! nothing changes. Moving back never has a precondition. `Completed` is
//! terminal.

pub mod controller;
pub mod shuffle;
pub mod view;

use thiserror::Error;

pub use controller::QuizController;
pub use shuffle::shuffled;

use crate::page::{module_href, HOME_PAGE};

/// Letters labelling options by display position.
pub const OPTION_LETTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Errors and blocking notices raised by quiz actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Tried to move on without choosing an option.
    #[error("You haven't selected anything yet. Please choose an option before {}.", notice_ending(.finishing))]
    NothingSelected { finishing: bool },

    /// Tried to go past the last question without completing.
    #[error("already at the last question")]
    AtLastQuestion,

    /// Tried to complete before reaching the last question.
    #[error("the module can only be completed from its last question")]
    NotAtLastQuestion,

    /// The module is already complete.
    #[error("the module is already complete")]
    AlreadyCompleted,

    /// Selection target does not exist.
    #[error("question {question} has no option at position {position}")]
    NoSuchOption { question: usize, position: usize },
}

fn notice_ending(finishing: &bool) -> &'static str {
    if *finishing {
        "finishing the module"
    } else {
        "continuing"
    }
}

impl QuizError {
    /// Whether this should be shown to the user as a blocking notice.
    #[must_use]
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::NothingSelected { .. })
    }
}

/// The single action offered once a module is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOn {
    /// Continue with the module that has this id
    NextModule(u32),
    /// Return to the homepage
    Home,
}

impl FollowOn {
    /// Follow-on for a module id within a site of `module_count` modules.
    #[must_use]
    pub fn after(module_id: u32, module_count: u32) -> Self {
        let next = module_id.saturating_add(1);
        if next <= module_count {
            Self::NextModule(next)
        } else {
            Self::Home
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NextModule(_) => "Next Module",
            Self::Home => "Back to Home",
        }
    }

    /// Navigation target.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::NextModule(id) => module_href(*id),
            Self::Home => HOME_PAGE.to_string(),
        }
    }
}

/// Result of a successful navigation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The question at this index is now displayed
    Question(usize),
    /// The module is complete; the follow-on is configured
    Completed(FollowOn),
    /// The page should be left for this URL
    Navigate(String),
}

/// Navigation buttons on a question card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    BackToModules,
    Previous,
    Next,
    Complete,
}

impl NavAction {
    /// Value of the button's `data-action` attribute.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackToModules => "back-to-modules",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Complete => "complete",
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::BackToModules => "Back to Modules",
            Self::Previous => "Previous Question",
            Self::Next => "Next Question",
            Self::Complete => "Complete Module",
        }
    }

    /// Parse a `data-action` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "back-to-modules" => Some(Self::BackToModules),
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

/// Keys handled on a focused option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    /// Focus the next option, wrapping to the first
    Next,
    /// Focus the previous option, wrapping to the last
    Previous,
    /// Select the focused option
    Activate,
}

impl OptionKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" => Some(Self::Previous),
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }
}
