//! Logging infrastructure for the vpath library.
//!
//! Library code reports through the [`log`] facade. This module provides a
//! stderr backend for that facade with three coarse verbosity levels, and
//! the initialization logic the CLI uses to pick one.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "VPATH_LOG_MODE";

/// Output verbosity, from silent to chatty.
///
/// # Examples
///
/// ```
/// use vpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing at all, not even errors.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records, tagged with their module.
    Verbose,
}

impl LogLevel {
    /// Every level, least verbose first.
    pub const ALL: [Self; 3] = [Self::Quiet, Self::Normal, Self::Verbose];

    /// The name accepted by `VPATH_LOG_MODE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// The `log` crate filter this level maps to.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown log mode '{s}' (expected quiet, normal or verbose)"))
    }
}

/// A stderr-based backend for the `log` facade.
///
/// Records passing the level's filter are written as `LEVEL: message`. In
/// verbose mode the record's module path is added after the level.
///
/// # Examples
///
/// ```
/// use vpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// ```
#[derive(Debug, Default)]
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

    /// Installs this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger was already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match (self.level, record.module_path()) {
            (LogLevel::Verbose, Some(module)) => {
                eprintln!("{} [{module}]: {}", record.level(), record.args());
            }
            _ => eprintln!("{}: {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Pick a logger level from command-line flags, falling back to
/// `VPATH_LOG_MODE` and then to [`LogLevel::Normal`].
///
/// `verbose` wins over `quiet`. An unrecognised `VPATH_LOG_MODE` is ignored.
///
/// # Examples
///
/// ```
/// use vpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default(),
    };
    Logger::new(level)
}
