//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and workbook
//! management.

use crate::error::CliError;
use magnolia::database::default_data_dir;
use magnolia::operations::seed_workbook;
use magnolia::{Config, ConfigBuilder, Database, DatabaseConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic workbook initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `MAGNOLIA_DATA_DIR`, else
/// `~/.magnolia`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    default_data_dir()
        .map_err(|_| CliError::Config("Could not determine home directory".to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `magnolia.yaml`
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
///
/// Global command-line options are applied on top by the callers.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the workbook with configuration.
///
/// A missing workbook is created and given its administrative tables unless
/// auto-init is disabled on the command line or in configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the workbook doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = DatabaseConfig::in_data_dir(resolve_data_dir(global)?);
    let created = !db_config.path.exists();

    if created && (global.disable_autoinit || config.autoinit_disabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = match global.busy_timeout {
        Some(seconds) => Duration::from_secs(seconds.into()),
        None => config.lock_wait(),
    };
    let path = db_config.path.clone();
    let mut db = Database::open(db_config.with_busy_timeout(timeout))?;

    if created {
        seed_workbook(&mut db, &[])?;
        log::info!("initialized empty workbook at {}", shorten_path(&path));
    }

    Ok(db)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
