//! Interrupt handling for the terminal quiz.
//!
//! In raw mode Ctrl+C arrives as a key event, but SIGINT can still come
//! from outside the terminal (or before raw mode is entered). The hook
//! installed here raises an [`InterruptFlag`] that the event loop polls,
//! so the terminal is restored before the process exits with code 130.
//!
//! # Usage
//!
//! ```rust,no_run
//! use conscious_choice::signal;
//!
//! let interrupt = signal::install();
//! let shared = interrupt.shared();
//! // hand `shared` to tui::run_tui
//! # let _ = shared;
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Raised once an interrupt has been received.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// A lowered flag with no signal hook attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn lower(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// The underlying atomic, for loops that poll it directly.
    #[must_use]
    pub fn shared(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}

static HOOKED: OnceLock<InterruptFlag> = OnceLock::new();

/// Hook SIGINT (and SIGTERM) into a process-wide flag.
///
/// The hook is registered once; later calls return the same flag, lowered
/// again so a previous quiz run's interrupt does not leak into the next.
/// If another handler already owns the signal, the flag still works for
/// [`InterruptFlag::raise`] but nothing raises it automatically.
pub fn install() -> InterruptFlag {
    let flag = HOOKED.get_or_init(|| {
        let flag = InterruptFlag::new();
        let hook = flag.clone();
        match ctrlc::set_handler(move || {
            log::info!("Interrupt received, leaving quiz");
            hook.raise();
        }) {
            Ok(()) => log::trace!("Interrupt hook installed"),
            Err(e) => log::debug!("Interrupt hook not installed: {}", e),
        }
        flag
    });
    flag.lower();
    flag.clone()
}
