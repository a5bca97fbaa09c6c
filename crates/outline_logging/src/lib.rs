#![deny(missing_docs)]
//! Shared logging utilities for the outline workspace.
//!
//! This crate provides the `outline_*` logging macros used across the
//! codebase, a per-thread extraction-pass counter for log correlation, and a
//! minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local sequence number of the most recent extraction pass.
    static PASS_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Advances the extraction-pass counter for the current thread and returns
/// the new sequence number. The watcher calls this once per pass so that log
/// lines from the same pass can be correlated.
pub fn next_pass_seq() -> u64 {
    PASS_SEQ.with(|v| {
        let next = v.get() + 1;
        v.set(next);
        next
    })
}

/// Sequence number of the most recent extraction pass on the current thread.
/// Returns 0 before the first pass.
pub fn current_pass_seq() -> u64 {
    PASS_SEQ.with(Cell::get)
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! outline_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! outline_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! outline_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! outline_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! outline_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
