//! Configuration validation.
//!
//! This module checks merged configuration values before they are used.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest accepted extra nationality name.
const MAX_NATIONALITY_LEN: usize = 64;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use magnolia::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(ref names) = config.extra_nationalities {
            for name in names {
                Self::validate_nationality(name)?;
            }
        }

        Ok(())
    }

    /// A nationality must be a non-empty country name of letters, spaces,
    /// hyphens and apostrophes.
    fn validate_nationality(name: &str) -> Result<()> {
        let trimmed = name.trim();
        let invalid = |message: &str| Error::Validation {
            field: "extra_nationalities".into(),
            message: format!("'{name}': {message}"),
        };

        if trimmed.is_empty() {
            return Err(invalid("Cannot be empty or only whitespace"));
        }
        if trimmed.chars().count() > MAX_NATIONALITY_LEN {
            return Err(invalid("Cannot exceed 64 characters"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
        {
            return Err(invalid(
                "May only contain letters, spaces, hyphens and apostrophes",
            ));
        }

        Ok(())
    }
}
