//! Content documents and how they are loaded.
//!
//! - [`model`]: typed site and module documents
//! - [`loader`]: fetch → parse pipeline with the homepage fan-out
//! - [`check`]: authoring invariants reported by `conscious-choice check`

pub mod check;
pub mod loader;
pub mod model;

pub use check::{check_module, AuthoringIssue};
pub use loader::{
    module_path, ContentError, ContentLoader, DirFetcher, Fetcher, HomepageContent, Response,
    SITE_DATA_PATH,
};
pub use model::{
    About, Footer, Hero, HeroDescription, MetaItem, Module, ModulesSection, Philosophy,
    PhilosophyCard, Question, QuizOption, Resource, SiteData,
};
