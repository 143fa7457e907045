//! JSON page summaries.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "kind": "module",
//!   "title": "Honesty - Conscious Choice",
//!   "populated": true,
//!   "error": null,
//!   "exit_code": 0,
//!   "exit_code_name": "CC000",
//!   "module": {
//!     "id": 3,
//!     "badge": "Module 3",
//!     "question_count": 5,
//!     "current_question": 0,
//!     "progress_percent": 20.0,
//!     "follow_on": "module.html?id=4",
//!     "questions": [
//!       { "title": "...", "options": ["...", "..."], "correct_position": 1 }
//!     ]
//!   },
//!   "module_cards": []
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::error::ExitCode;
use crate::page::PageKind;
use crate::quiz::QuizController;
use crate::site::Page;

use super::OutputError;

/// One rendered question, options in display order.
#[derive(Debug, Clone, Serialize)]
pub struct JsonQuestion {
    pub title: String,
    pub options: Vec<String>,
    /// Display position of the first correct option
    pub correct_position: Option<usize>,
}

/// Quiz state of a module page.
#[derive(Debug, Clone, Serialize)]
pub struct JsonModule {
    pub id: u32,
    pub badge: String,
    pub question_count: usize,
    pub current_question: usize,
    pub progress_percent: f64,
    /// Where the completion button leads
    pub follow_on: String,
    pub questions: Vec<JsonQuestion>,
}

impl JsonModule {
    /// Summarize a mounted quiz.
    #[must_use]
    pub fn from_quiz(quiz: &QuizController) -> Self {
        let questions = quiz
            .module()
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let options = quiz.displayed_options(index);
                JsonQuestion {
                    title: question.title.clone(),
                    options: options.iter().map(|o| o.text.clone()).collect(),
                    correct_position: options.iter().position(|o| o.correct),
                }
            })
            .collect();

        Self {
            id: quiz.module_id(),
            badge: format!("Module {}", quiz.module().id),
            question_count: quiz.question_count(),
            current_question: quiz.current_index(),
            progress_percent: quiz.progress_percent(),
            follow_on: quiz.follow_on().href(),
            questions,
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub kind: PageKind,
    pub title: String,
    /// Whether content was loaded into the page
    pub populated: bool,
    /// Content error message when not populated
    pub error: Option<String>,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "CC000")
    pub exit_code_name: String,
    /// Quiz summary on module pages
    pub module: Option<JsonModule>,
    /// Module card titles on the homepage, in list order
    pub module_cards: Vec<String>,
}

impl JsonOutput {
    /// Summarize a rendered page.
    #[must_use]
    pub fn new(page: &Page, exit_code: ExitCode) -> Self {
        let doc = page.document();
        let module_cards = match page.kind() {
            PageKind::Home => doc
                .query_selector_all(".module-card h3")
                .into_iter()
                .map(|title| doc.text_content(title))
                .collect(),
            PageKind::Module => Vec::new(),
        };

        Self {
            kind: page.kind(),
            title: doc.title().to_string(),
            populated: page.is_populated(),
            error: page.error().map(ToString::to_string),
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
            module: page.quiz().map(JsonModule::from_quiz),
            module_cards,
        }
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON and a trailing newline to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}
