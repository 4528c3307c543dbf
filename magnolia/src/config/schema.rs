//! Configuration schema definitions.
//!
//! This module defines the configuration structure for magnolia: lock
//! waiting, workbook auto-initialization, listing output and accepted
//! nationalities.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validation::Validator;

/// Default maximum lock wait, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that configuration layers can be merged;
/// accessors supply the defaults.
///
/// # Examples
///
/// ```
/// use magnolia::config::{Config, OutputFormat};
///
/// let config = Config {
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.lock_wait().as_secs(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the workbook lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a workbook on first use.
    pub disable_autoinit: Option<bool>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,

    /// Nationalities accepted on top of the built-in country list.
    pub extra_nationalities: Option<Vec<String>>,
}

impl Config {
    /// The lock wait, falling back to the default.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Whether auto-initialization is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// The listing format, falling back to [`OutputFormat::Table`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// A field validator that also accepts the configured nationalities.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new().with_extra_nationalities(self.extra_nationalities.iter().flatten())
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use magnolia::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown output format '{other}' (expected table, json or csv)"
            )),
        }
    }
}
