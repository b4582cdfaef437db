//! Logging infrastructure for the modelfind library.
//!
//! Library code reports diagnostics through the `log` facade; this module
//! provides a simple stderr logger with configurable levels and installs
//! it as the facade backend, so that absorbed canonicalization and cleanup
//! failures reach stderr in the CLI. Logging never affects control flow or
//! return values.

use std::env;
use std::fmt;
use std::sync::OnceLock;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose
/// (Verbose).
///
/// # Examples
///
/// ```
/// use modelfind::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelfind::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` facade filter matching this level.
    ///
    /// Quiet suppresses everything, Normal passes errors and warnings,
    /// Verbose passes all records.
    #[must_use]
    pub const fn max_level(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use modelfind::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    ///
    /// Warning messages are displayed at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let required = match metadata.level() {
            log::Level::Error | log::Level::Warn => LogLevel::Normal,
            log::Level::Info | log::Level::Debug | log::Level::Trace => LogLevel::Verbose,
        };
        self.level >= required
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

static FACADE_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `MODELFIND_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// The first call also installs the logger as the `log` facade backend,
/// so library diagnostics reach stderr. Later calls return a logger at
/// the requested level but cannot change the installed backend.
///
/// # Examples
///
/// ```
/// use modelfind::init_logger;
///
/// let logger = init_logger(true, false);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = resolve_level(verbose, quiet);

    let backend = FACADE_LOGGER.get_or_init(|| Logger::new(level));
    if log::set_logger(backend).is_ok() {
        log::set_max_level(backend.level().max_level());
    }

    Logger::new(level)
}

fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    // CLI flags take precedence
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    // Check environment variable
    if let Ok(env_value) = env::var("MODELFIND_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    // Default to Normal
    LogLevel::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("invalid").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_default() {
        let logger = Logger::default();
        assert_eq!(logger.level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_verbose_flag() {
        let logger = init_logger(true, false);
        assert_eq!(logger.level(), LogLevel::Verbose);
    }

    #[test]
    fn test_init_logger_quiet_flag() {
        let logger = init_logger(false, true);
        assert_eq!(logger.level(), LogLevel::Quiet);
    }

    #[test]
    fn test_init_logger_verbose_takes_precedence() {
        let logger = init_logger(true, true);
        assert_eq!(logger.level(), LogLevel::Verbose);
    }

    #[test]
    fn test_facade_enabled_follows_level() {
        use log::Log;

        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&warn));

        let normal = Logger::new(LogLevel::Normal);
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&warn));
        assert!(verbose.enabled(&debug));
    }

    #[test]
    fn test_max_level_mapping() {
        assert_eq!(LogLevel::Quiet.max_level(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.max_level(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.max_level(), log::LevelFilter::Trace);
    }
}
