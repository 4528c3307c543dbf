//! Where the workbook lives and how it is opened.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the workbook inside the data directory.
pub const DATABASE_FILE_NAME: &str = "magnolia.db";

/// Busy timeout used unless configuration says otherwise.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// How to open a workbook.
///
/// # Examples
///
/// ```
/// use magnolia::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::in_data_dir("/srv/desk")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.path.ends_with("magnolia.db"));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the workbook file.
    pub path: PathBuf,
    /// How long a storage call waits on a locked workbook before failing.
    pub busy_timeout: Duration,
    /// Create the file and its directory when missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Opens the workbook at `path`, creating it when missing.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Opens the workbook kept in `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets how long to wait on a locked workbook.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Opens read-only. A missing workbook is then an error rather than
    /// being created.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/magnolia.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// The data directory: `MAGNOLIA_DATA_DIR` when set, else `~/.magnolia`.
///
/// # Errors
///
/// Returns an error if the variable is unset and the home directory cannot
/// be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("MAGNOLIA_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".magnolia"))
}
