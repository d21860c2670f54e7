#![deny(missing_docs)]
//! Shared logging utilities for the tracker workspace.
//!
//! This crate provides the `tracker_*` logging macros used by the engine and
//! the app, a level lookup driven by the environment, and a minimal test
//! initializer for the global logger.

use log::LevelFilter;

/// Environment variable consulted by [`level_from_env`].
pub const LEVEL_ENV_VAR: &str = "TRACKER_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! tracker_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! tracker_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! tracker_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! tracker_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! tracker_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `debug` or `WARN`.
///
/// Unknown names yield `None`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Reads the log level from [`LEVEL_ENV_VAR`], falling back to `default`
/// when the variable is unset or unparsable.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    std::env::var(LEVEL_ENV_VAR)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(default)
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
