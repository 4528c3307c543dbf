//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `MAGNOLIA_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use magnolia::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `MAGNOLIA_EXTRA_NATIONALITIES` is comma-separated and adds to any
    /// nationalities already configured; the other variables replace.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var("MAGNOLIA_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "MAGNOLIA_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var("MAGNOLIA_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("MAGNOLIA_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(val) = env::var("MAGNOLIA_OUTPUT_FORMAT") {
            config.output_format =
                Some(val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                    field: "MAGNOLIA_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("MAGNOLIA_EXTRA_NATIONALITIES") {
            let names = Self::parse_list(&val);
            config
                .extra_nationalities
                .get_or_insert_with(Vec::new)
                .extend(names);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, dropping blank entries.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}
