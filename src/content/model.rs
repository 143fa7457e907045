//! Typed content documents.
//!
//! These mirror the JSON files under `data/`: one `site.json` for the
//! homepage and one `module<N>.json` per learning module. Keys are
//! camelCase on disk.

use serde::{Deserialize, Serialize};

/// One instructional module with its ordered scenario questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Module number, expected in `1..=7`
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Text shown on the completion card
    #[serde(default)]
    pub completion_message: String,
    pub questions: Vec<Question>,
}

impl Module {
    /// Number of questions in the module.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// A scenario question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    pub scenario: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Question {
    /// Number of options flagged correct.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }
}

/// One answer choice. Correctness and feedback travel with the option
/// through shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub feedback: String,
}

/// External "learn more" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

/// Homepage content from `site.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    pub hero: Hero,
    pub philosophy: Philosophy,
    /// Heading and intro of the module list
    pub modules: ModulesSection,
    pub about: About,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub description: HeroDescription,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub cta_link: String,
}

/// Hero description: one block of text, or one paragraph per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeroDescription {
    Text(String),
    Paragraphs(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Philosophy {
    pub title: String,
    pub cards: Vec<PhilosophyCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosophyCard {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesSection {
    pub title: String,
    #[serde(default)]
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub meta: Vec<MetaItem>,
}

/// Label/value pair in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
}
