#![deny(missing_docs)]
//! Shared logging utilities for the dashnav workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a per-thread route context for log lines, and a minimal test initializer
//! for the global logger.

use std::cell::RefCell;

thread_local! {
    /// Fragment most recently written by the shell on this thread.
    static ROUTE: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Records the fragment the shell currently shows on this thread.
/// The host calls this after every fragment write.
pub fn set_route(fragment: &str) {
    ROUTE.with(|route| {
        let mut route = route.borrow_mut();
        route.clear();
        route.push_str(fragment);
    });
}

/// Returns the fragment recorded for this thread, or an empty string.
pub fn current_route() -> String {
    ROUTE.with(|route| route.borrow().clone())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have set the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
