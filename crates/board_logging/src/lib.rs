#![deny(missing_docs)]
//! Shared logging utilities for the solarboard workspace.
//!
//! This crate provides the `board_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::sync::Once;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a textual level ("error", "warn", "info", "debug", "trace", "off").
///
/// Unknown names yield `None` so callers can keep their own default.
pub fn parse_level(name: &str) -> Option<log::LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "error" => Some(log::LevelFilter::Error),
        "warn" | "warning" => Some(log::LevelFilter::Warn),
        "info" => Some(log::LevelFilter::Info),
        "debug" => Some(log::LevelFilter::Debug),
        "trace" => Some(log::LevelFilter::Trace),
        _ => None,
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs a logger, and
/// an already-installed logger from elsewhere is left in place.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level("INFO"), Some(log::LevelFilter::Info));
        assert_eq!(parse_level(" warning "), Some(log::LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_initializer_is_idempotent() {
        initialize_for_tests();
        initialize_for_tests();
        board_info!("logger initialised twice without panicking");
    }
}
