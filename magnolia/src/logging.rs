//! Stderr logging for the library and the booking desk.
//!
//! Library code only uses the `log` macros. The binary picks a [`LogLevel`]
//! with [`init_logger`] and installs the resulting [`Logger`] as the `log`
//! backend, so booking, check-in and update records appear in verbose mode
//! and disappear entirely in quiet mode.

use std::env;
use std::fmt;
use std::io::Write;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_VAR: &str = "MAGNOLIA_LOG_MODE";

/// How much the desk reports on stderr.
///
/// # Examples
///
/// ```
/// use magnolia::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl LogLevel {
    /// Parses `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the offending text when it names no level.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most detailed `log` level that passes at this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// The `log` backend writing to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The verbosity this logger was created with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the global `log` backend.
    ///
    /// Only the first call in a process installs a backend; later calls
    /// just adjust the maximum level.
    pub fn install(self) {
        if log::set_boxed_logger(Box::new(self)).is_err() {
            log::debug!("log backend already installed");
        }
        log::set_max_level(self.level.level_filter());
    }
}

/// Renders one record as a stderr line, e.g. `WARN: rollback failed`.
fn format_line(level: log::Level, message: &fmt::Arguments<'_>) -> String {
    let tag = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN",
        log::Level::Info => "INFO",
        log::Level::Debug | log::Level::Trace => "DEBUG",
    };
    format!("{tag}: {message}")
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            // a closed stderr has nowhere left to report to
            let _ = writeln!(
                std::io::stderr().lock(),
                "{}",
                format_line(record.level(), record.args())
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Picks the verbosity from CLI flags, then `MAGNOLIA_LOG_MODE`, then
/// [`LogLevel::Normal`]. `verbose` wins over `quiet`.
///
/// # Examples
///
/// ```
/// use magnolia::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
