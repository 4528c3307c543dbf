//! Error types for the magnolia library.
//!
//! This module provides the error hierarchy for every booking, lookup and
//! storage operation, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a magnolia error.
///
/// # Examples
///
/// ```
/// use magnolia::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the magnolia library.
#[derive(Debug, Error)]
pub enum Error {
    /// A field value failed its format, range or lookup rule.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested flight, table or booking does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A mutation was attempted on a booking that is already checked in.
    #[error("booking {reference} is checked in and locked")]
    StateConflict {
        /// The booking reference of the locked booking.
        reference: String,
    },

    /// The luggage allowance is already used up.
    #[error("booking {reference} is already at the maximum of {max} bag(s)")]
    LuggageAtMaximum {
        /// The booking reference.
        reference: String,
        /// The maximum number of bags.
        max: u8,
    },

    /// A table does not have the shape the booking core expects.
    #[error("malformed table '{table}': {details}")]
    MalformedTable {
        /// The offending table.
        table: String,
        /// What is wrong with it.
        details: String,
    },

    /// A table with the given name already exists.
    #[error("table '{table}' already exists")]
    TableExists {
        /// The duplicate table name.
        table: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },
}

impl From<crate::validation::Rejection> for Error {
    fn from(rejection: crate::validation::Rejection) -> Self {
        Self::Validation {
            field: rejection.field.to_string(),
            message: rejection.reason,
        }
    }
}

impl From<crate::luggage::InvalidLuggageError> for Error {
    fn from(err: crate::luggage::InvalidLuggageError) -> Self {
        Self::Validation {
            field: "luggage".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::reference::InvalidReferenceError> for Error {
    fn from(err: crate::reference::InvalidReferenceError) -> Self {
        Self::Validation {
            field: "booking number".into(),
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if the error is a locked-booking conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::Error;
    ///
    /// let err = Error::StateConflict { reference: "TF78RE32".into() };
    /// assert!(err.is_state_conflict());
    /// ```
    #[must_use]
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::StateConflict { .. })
    }

    /// Check if the error is a field validation rejection.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if the error came from the storage backend.
    #[must_use]
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Io(_)
                | Self::LockTimeout { .. }
                | Self::DatabaseCorruption { .. }
                | Self::MalformedTable { .. }
        )
    }
}
