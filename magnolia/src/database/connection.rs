//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for optimal `SQLite` configuration.

use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A workbook stored in a single `SQLite` file.
///
/// This type manages a `SQLite` connection with appropriate PRAGMA settings
/// for concurrent access, and implements [`crate::TableStore`] on top of it.
///
/// # Examples
///
/// ```no_run
/// use magnolia::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/magnolia.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row, so it goes through query_row
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        }
        conn.busy_timeout(config.busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        super::migrations::prepare_schema(&conn, !config.read_only).map_err(|e| match e {
            Error::DatabaseCorruption { details } => Error::DatabaseCorruption {
                details: format!("{}: {details}", config.path.display()),
            },
            other => other,
        })?;

        log::debug!("opened workbook at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Translates a driver error, surfacing lock contention as
    /// [`Error::LockTimeout`].
    pub(super) fn translate(&self, err: rusqlite::Error) -> Error {
        translate_error(err, self.config.busy_timeout.as_secs())
    }

    pub(super) fn busy_timeout_secs(&self) -> u64 {
        self.config.busy_timeout.as_secs()
    }
}

/// Maps driver errors onto the crate's storage failures.
pub(super) fn translate_error(err: rusqlite::Error, busy_timeout_secs: u64) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => Error::LockTimeout {
            seconds: busy_timeout_secs,
        },
        Some(ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase) => Error::DatabaseCorruption {
            details: err.to_string(),
        },
        _ => Error::Database(err),
    }
}
