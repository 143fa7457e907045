//! Conscious Choice - content renderer and quiz runner
//!
//! Renders the Conscious Choice learning site (a homepage and seven
//! ethics modules of multiple-choice questions) from its JSON content,
//! drives the module quiz state machine, and offers the same quiz in a
//! terminal UI.
//!
//! # Overview
//!
//! - [`content`]: typed content documents and the loader
//! - [`dom`]: the in-memory document pages are rendered into
//! - [`page`]: URL routing and page skeletons
//! - [`homepage`]: homepage population
//! - [`quiz`]: question cards and the quiz controller
//! - [`nav`]: scroll-position navigation highlighting
//! - [`site`]: page loading entry point
//! - [`output`]: HTML and JSON output
//! - [`tui`]: terminal quiz

pub mod cli;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod homepage;
pub mod logging;
pub mod nav;
pub mod output;
pub mod page;
pub mod quiz;
pub mod signal;
pub mod site;
pub mod tui;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use yansi::Paint;

use cli::{CheckArgs, Cli, Commands, OutputFormat, PageArgs, QuizArgs};
use config::Config;
use content::{check_module, module_path, ContentError, ContentLoader, DirFetcher, SITE_DATA_PATH};
use error::ExitCode;
use output::{HtmlOutput, JsonOutput};
use quiz::QuizController;
use site::{PageView, Site};
use tui::{App, Outcome, Theme, TuiError};

/// Number of modules the site publishes.
pub const MODULE_COUNT: u32 = 7;

/// Run the command described by `cli`.
///
/// Logging is expected to be initialized by the caller.
///
/// # Errors
///
/// Returns an error for unusable URLs, unreadable content in `quiz`,
/// output failures, and an interrupted TUI ([`TuiError::Interrupted`]).
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        yansi::disable();
    }

    let config = Config::load();
    match cli.command {
        Commands::Page(args) => run_page(args, &config),
        Commands::Quiz(args) => run_quiz(args, &config),
        Commands::Check(args) => run_check(args, &config),
    }
}

fn site_for(root: &Path) -> Site<DirFetcher> {
    log::debug!("Serving content from {}", root.display());
    Site::new(ContentLoader::new(DirFetcher::new(root)))
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("Shuffling options with seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

// ==================== page ====================

fn run_page(args: PageArgs, config: &Config) -> Result<ExitCode> {
    let root = config.resolve_site_root(args.root);
    let site = site_for(&root);
    let mut rng = rng_for(config.resolve_seed(args.seed));

    let page = match site.follow(&args.url, &mut rng) {
        PageView::Rendered(page) => page,
        PageView::Redirect(target) => {
            bail!("'{}' redirects to '{}', which redirects again", args.url, target)
        }
        PageView::Inert => bail!("'{}' is not a page this site renders", args.url),
    };

    let exit_code = if page.is_populated() {
        ExitCode::Success
    } else {
        ExitCode::ContentUnavailable
    };

    let mut writer = open_output(args.output.as_deref())?;
    match args.format {
        OutputFormat::Html => HtmlOutput::new(page.document()).write_to(&mut writer)?,
        OutputFormat::Json => JsonOutput::new(&page, exit_code).write_to(&mut writer)?,
    }
    writer.flush().context("failed to flush output")?;

    Ok(exit_code)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            log::info!("Writing page to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

// ==================== quiz ====================

fn run_quiz(args: QuizArgs, config: &Config) -> Result<ExitCode> {
    let root = config.resolve_site_root(args.root);
    let loader = ContentLoader::new(DirFetcher::new(root));
    let count = loader.module_count();
    if args.id == 0 || args.id > count {
        bail!("module {} does not exist; choose 1-{}", args.id, count);
    }

    let theme = Theme::from_arg(config.resolve_theme(args.theme));
    let mut rng = rng_for(config.resolve_seed(args.seed));
    let mut app = open_quiz(&loader, args.id, &mut rng)?.with_theme(theme);

    let interrupt = signal::install();
    let outcome = {
        let _muted = logging::mute();
        tui::run_tui(&mut app, Some(interrupt.shared()), |id| {
            open_quiz(&loader, id, &mut rng)
        })
    };

    match outcome {
        Ok(Outcome::Home) => {
            println!("All modules complete. Open {} for more.", page::HOME_PAGE);
            Ok(ExitCode::Success)
        }
        Ok(_) => Ok(ExitCode::Success),
        Err(TuiError::Interrupted) => Ok(ExitCode::Interrupted),
        Err(e) => Err(e.into()),
    }
}

/// Load module `id` and mount it into a fresh module page.
fn open_quiz(
    loader: &ContentLoader<DirFetcher>,
    id: u32,
    rng: &mut StdRng,
) -> Result<App, ContentError> {
    let module = loader.load_module(id)?;
    let mut document = page::skeleton::module_page();
    let quiz = QuizController::mount(&mut document, module, id, loader.module_count(), rng);
    Ok(App::new(document, quiz))
}

// ==================== check ====================

fn run_check(args: CheckArgs, config: &Config) -> Result<ExitCode> {
    let root: PathBuf = config.resolve_site_root(args.root);
    let loader = ContentLoader::new(DirFetcher::new(&root));
    let mut failures = 0usize;

    let mut out = io::stdout().lock();
    writeln!(out, "Checking content in {}", root.display().bold())?;

    match loader.load_site() {
        Ok(_) => writeln!(out, "  {} {}", "ok".green(), SITE_DATA_PATH)?,
        Err(e) => {
            failures += 1;
            writeln!(out, "  {} {}", "error".red().bold(), e)?;
        }
    }

    for id in 1..=loader.module_count() {
        let path = module_path(id);
        match loader.load_module(id) {
            Ok(module) => {
                let issues = check_module(&module, id);
                if issues.is_empty() {
                    writeln!(
                        out,
                        "  {} {} ({} questions)",
                        "ok".green(),
                        path,
                        module.question_count()
                    )?;
                } else {
                    failures += issues.len();
                    for issue in issues {
                        writeln!(out, "  {} {} {}", "warn".yellow().bold(), path, issue)?;
                    }
                }
            }
            Err(e) => {
                failures += 1;
                writeln!(out, "  {} {}", "error".red().bold(), e)?;
            }
        }
    }

    if failures == 0 {
        writeln!(out, "{}", "All content is valid.".green().bold())?;
        Ok(ExitCode::Success)
    } else {
        writeln!(out, "{} problem(s) found.", failures.red().bold())?;
        Ok(ExitCode::ContentUnavailable)
    }
}
