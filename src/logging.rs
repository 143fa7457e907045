//! Logging setup for the `conscious-choice` binary.
//!
//! Library code logs through the `log` facade only; the binary installs an
//! `env_logger` backend on stderr so rendered pages on stdout stay clean.
//! `RUST_LOG`, when set, takes precedence over `-v`/`-q`.
//!
//! The terminal quiz owns the screen while it runs, so [`mute`] silences
//! all but errors until its guard is dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use conscious_choice::logging::{init_logging, mute};
//!
//! init_logging(1, false);
//! log::debug!("visible");
//! {
//!     let _muted = mute();
//!     log::info!("dropped while the TUI is up");
//! }
//! ```

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Where the active level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelSource {
    Env,
    Flags(LevelFilter),
}

impl LevelSource {
    fn detect(verbose: u8, quiet: bool) -> Self {
        if std::env::var_os("RUST_LOG").is_some() {
            return Self::Env;
        }
        Self::Flags(match (quiet, verbose) {
            (true, _) => LevelFilter::Error,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        })
    }
}

/// Install the logger for the given CLI verbosity.
///
/// Returns `false` if a logger was already installed (as when the
/// application is driven repeatedly from tests); the existing one is kept.
pub fn init_logging(verbose: u8, quiet: bool) -> bool {
    let source = LevelSource::detect(verbose, quiet);

    let mut builder = Builder::new();
    builder.target(Target::Stderr);
    match source {
        LevelSource::Env => {
            builder.parse_default_env();
        }
        LevelSource::Flags(level) => {
            builder.filter_level(level);
        }
    }
    with_format(&mut builder, verbose > 0);

    if builder.try_init().is_err() {
        return false;
    }
    log::debug!("Logging at {} ({:?})", log::max_level(), source);
    true
}

#[cfg(debug_assertions)]
fn with_format(builder: &mut Builder, show_module: bool) {
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        write!(buf, "{} {style}{:<5}{style:#} ", buf.timestamp_seconds(), record.level())?;
        if show_module {
            write!(buf, "[{}] ", record.target())?;
        }
        writeln!(buf, "{}", record.args())
    });
}

#[cfg(not(debug_assertions))]
fn with_format(builder: &mut Builder, _show_module: bool) {
    builder.format(|buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(buf, "{style}{:<5}{style:#} {}", record.level(), record.args())
    });
}

/// Restores the previous maximum level when dropped.
#[derive(Debug)]
#[must_use = "logging is restored as soon as the guard is dropped"]
pub struct MuteGuard {
    previous: LevelFilter,
}

impl Drop for MuteGuard {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Drop everything below `error` until the guard goes out of scope.
pub fn mute() -> MuteGuard {
    let previous = log::max_level();
    log::set_max_level(previous.min(LevelFilter::Error));
    MuteGuard { previous }
}
