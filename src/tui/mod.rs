//! Terminal User Interface for taking module quizzes.
//!
//! # Overview
//!
//! - [`app`]: application state wrapping one module page view
//! - [`events`]: keyboard event polling
//! - [`keybindings`]: key → action table
//! - [`theme`]: color palettes
//! - [`ui`]: ratatui rendering
//! - [`run`]: terminal setup and the event loop
//!
//! # Architecture
//!
//! The TUI follows a unidirectional data flow:
//! 1. Events are captured from the terminal (crossterm)
//! 2. Events are translated to Actions
//! 3. Actions drive the page's `QuizController`
//! 4. The UI renders from the controller state

pub mod app;
pub mod events;
pub mod keybindings;
pub mod run;
pub mod theme;
pub mod ui;

pub use app::{Action, App, AppMode, Outcome};
pub use events::{EventError, EventHandler};
pub use run::{run_tui, TuiError, TuiResult};
pub use theme::Theme;
pub use ui::render;
