//! Authoring checks for content documents.
//!
//! The loader accepts any well-formed document. These checks report the
//! invariants content authors are expected to keep, such as exactly one
//! correct option per question, without ever rejecting content.

use std::fmt;

use super::model::Module;

/// A single authoring problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoringIssue {
    /// The document's `id` differs from the id it was requested under.
    IdMismatch { expected: u32, found: u32 },
    /// The module has no questions.
    NoQuestions,
    /// A question has no options.
    NoOptions { question: usize },
    /// A question does not have exactly one correct option.
    CorrectCount { question: usize, count: usize },
    /// More options than there are letters to label them with.
    TooManyOptions { question: usize, count: usize },
}

impl fmt::Display for AuthoringIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdMismatch { expected, found } => {
                write!(f, "declares id {found} but is served as module {expected}")
            }
            Self::NoQuestions => write!(f, "has no questions"),
            Self::NoOptions { question } => write!(f, "question {} has no options", question + 1),
            Self::CorrectCount { question, count } => write!(
                f,
                "question {} has {} correct options (expected exactly 1)",
                question + 1,
                count
            ),
            Self::TooManyOptions { question, count } => write!(
                f,
                "question {} has {} options, only the first {} get a letter",
                question + 1,
                count,
                crate::quiz::OPTION_LETTERS.len()
            ),
        }
    }
}

/// Collect authoring issues for a module served under `expected_id`.
#[must_use]
pub fn check_module(module: &Module, expected_id: u32) -> Vec<AuthoringIssue> {
    let mut issues = Vec::new();

    if module.id != expected_id {
        issues.push(AuthoringIssue::IdMismatch {
            expected: expected_id,
            found: module.id,
        });
    }
    if module.questions.is_empty() {
        issues.push(AuthoringIssue::NoQuestions);
    }

    for (index, question) in module.questions.iter().enumerate() {
        if question.options.is_empty() {
            issues.push(AuthoringIssue::NoOptions { question: index });
            continue;
        }
        let count = question.correct_count();
        if count != 1 {
            issues.push(AuthoringIssue::CorrectCount {
                question: index,
                count,
            });
        }
        if question.options.len() > crate::quiz::OPTION_LETTERS.len() {
            issues.push(AuthoringIssue::TooManyOptions {
                question: index,
                count: question.options.len(),
            });
        }
    }

    issues
}
