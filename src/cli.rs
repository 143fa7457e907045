//! Command-line interface definitions for `conscious-choice`.
//!
//! This module defines all CLI arguments, subcommands, and options using the clap derive API.
//! Global options (verbosity, color, error format) apply to every subcommand.
//!
//! # Example
//!
//! ```bash
//! # Render the homepage from ./site to stdout
//! conscious-choice page index.html --root site
//!
//! # Summarize module 3 as JSON with a fixed option order
//! conscious-choice page "module.html?id=3" --format json --seed 42
//!
//! # Take module 1 in the terminal
//! conscious-choice quiz 1 --theme dark
//!
//! # Check every content file
//! conscious-choice -v check --root site
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Renderer and terminal quiz for the Conscious Choice learning site.
///
/// Renders the homepage and module pages from the site's JSON content,
/// runs module quizzes interactively, and checks content for authoring
/// mistakes.
#[derive(Debug, Parser)]
#[command(name = "conscious-choice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the page a site URL resolves to
    Page(PageArgs),
    /// Take a module quiz in the terminal
    Quiz(QuizArgs),
    /// Load every content file and report authoring issues
    Check(CheckArgs),
}

/// Arguments for the page subcommand.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Site URL, e.g. `index.html` or `module.html?id=3`
    #[arg(value_name = "URL")]
    pub url: String,

    /// Site root containing the `data/` directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Seed for option shuffling (random if omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the quiz subcommand.
#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Module number to start with
    #[arg(value_name = "ID")]
    pub id: u32,

    /// Site root containing the `data/` directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Seed for option shuffling (random if omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
}

/// Arguments for the check subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Site root containing the `data/` directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Output format for rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full HTML document
    Html,
    /// JSON page summary
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Terminal color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeArg {
    /// Follow the terminal (dark unless `COLORFGBG` says light)
    #[default]
    Auto,
    Light,
    Dark,
}
