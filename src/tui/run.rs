//! TUI main loop.
//!
//! This module provides the main entry point for running the terminal quiz.
//! It handles terminal setup, the event loop, and cleanup on exit.
//!
//! # Terminal Management
//!
//! The TUI takes over the terminal by:
//! - Enabling raw mode (unbuffered input, no echo)
//! - Entering the alternate screen buffer
//! - Hiding the cursor
//!
//! All these changes are reverted on exit, including on panic.
//!
//! # Event Loop
//!
//! 1. Poll for events with a timeout
//! 2. Handle any action that occurred
//! 3. When the app asks to open the next module, load it in place
//! 4. Render the current state, limited to ~60 FPS

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use thiserror::Error;

use super::app::{App, Outcome};
use super::events::EventHandler;
use super::ui::render;
use crate::content::ContentError;

/// Frame rate limit: 60 FPS = ~16.67ms per frame.
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Event poll timeout: use the frame duration for responsive rendering.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// I/O error from terminal operations.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// Event handling error.
    #[error("event error: {0}")]
    Event(#[from] super::events::EventError),

    /// The TUI was interrupted by a shutdown signal.
    #[error("interrupted by shutdown signal")]
    Interrupted,
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal quiz until the user leaves it.
///
/// `load_module` opens the follow-on module when the user continues from
/// a completion card; the new module replaces `app` in place. A failed
/// load is shown as a notice on the completion card.
///
/// Returns the final [`Outcome`] (`Home` or `Quit`).
///
/// # Errors
///
/// Returns `TuiError::Io` or `TuiError::Event` for terminal failures and
/// `TuiError::Interrupted` if the shutdown flag was raised.
pub fn run_tui<L>(
    app: &mut App,
    shutdown_flag: Option<Arc<AtomicBool>>,
    load_module: L,
) -> TuiResult<Outcome>
where
    L: FnMut(u32) -> Result<App, ContentError>,
{
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let result = setup_terminal()
        .and_then(|mut terminal| run_loop(&mut terminal, app, shutdown_flag, load_module));
    restore_terminal();

    let _ = panic::take_hook();
    result
}

fn run_loop<L>(
    terminal: &mut Terminal,
    app: &mut App,
    shutdown_flag: Option<Arc<AtomicBool>>,
    mut load_module: L,
) -> TuiResult<Outcome>
where
    L: FnMut(u32) -> Result<App, ContentError>,
{
    let event_handler = EventHandler::new();
    let mut last_render = Instant::now();

    loop {
        if shutdown_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
        {
            log::info!("Shutdown signal received, exiting TUI");
            return Err(TuiError::Interrupted);
        }

        if app.should_quit() {
            match app.outcome().cloned().unwrap_or(Outcome::Quit) {
                Outcome::Module(id) => open_next(app, id, &mut load_module),
                outcome => {
                    log::debug!("TUI finished: {:?}", outcome);
                    return Ok(outcome);
                }
            }
        }

        terminal.draw(|frame| render(frame, app))?;

        if let Some(action) = event_handler.poll(POLL_TIMEOUT)? {
            if !app.handle_action(action) {
                log::trace!("Action had no effect: {:?}", action);
            }
        }

        let elapsed = last_render.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
        last_render = Instant::now();
    }
}

/// Replace `app` with module `id`, keeping the palette.
fn open_next<L>(app: &mut App, id: u32, load_module: &mut L)
where
    L: FnMut(u32) -> Result<App, ContentError>,
{
    match load_module(id) {
        Ok(next) => {
            log::info!("Continuing with module {}", id);
            let theme = *app.theme();
            *app = next.with_theme(theme);
        }
        Err(e) => {
            log::error!("Error loading module {}: {}", id, e);
            app.follow_on_failed(format!("Module {id} could not be loaded: {e}"));
        }
    }
}

fn setup_terminal() -> TuiResult<Terminal> {
    log::debug!("Setting up terminal for TUI");
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore the terminal. Failures are ignored; there is nothing left to
/// restore them with.
fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    log::debug!("Terminal restored");
}
