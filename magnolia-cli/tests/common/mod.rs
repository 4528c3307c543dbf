//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Flight schedule fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small schedule: two flights to Paris and one to Oslo.
pub const SCHEDULE_CSV: &str = "\
flight number,destination,date,departure time,arrival time
MA101,Paris,2030-07-01,08:15,10:30
MA102,Paris,2030-07-02,18:00,20:15
MA201,Oslo,2030-07-03,09:00,11:40
";

/// Menu input that books Marie Curie on MA101 with one bag.
pub const BOOK_CURIE: &str = "3\nparis\nMA101\nmarie\ncurie\n1867-11-07\nab123cd45\nfrance\n1\ny\n";

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files (also the working directory)
/// - A separate data directory for the magnolia workbook
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the magnolia data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; magnolia creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("magnolia-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Create an environment whose workbook holds [`SCHEDULE_CSV`].
    pub fn with_schedule() -> Self {
        let env = Self::new();
        let csv = env.write_file("flights.csv", SCHEDULE_CSV);
        env.command()
            .arg("init")
            .arg("--flights")
            .arg(&csv)
            .assert()
            .success();
        env
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The working directory is the temporary directory and no `MAGNOLIA_*`
    /// variables leak in from the outer environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("magnolia").expect("Failed to find magnolia binary");
        cmd.current_dir(&self.temp_path);
        for var in [
            "MAGNOLIA_DATA_DIR",
            "MAGNOLIA_BUSY_TIMEOUT",
            "MAGNOLIA_DISABLE_AUTOINIT",
            "MAGNOLIA_MAXIMUM_LOCK_WAIT_SECONDS",
            "MAGNOLIA_OUTPUT_FORMAT",
            "MAGNOLIA_EXTRA_NATIONALITIES",
            "MAGNOLIA_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run the interactive menu with `input` on stdin and return stdout.
    pub fn menu(&self, input: &str) -> String {
        let output = self
            .command()
            .write_stdin(input)
            .output()
            .expect("Failed to run menu");
        assert!(
            output.status.success(),
            "menu failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("menu output is not UTF-8")
    }

    /// Book Marie Curie through the menu and return the booking number.
    pub fn book_curie(&self) -> String {
        let stdout = self.menu(&format!("{BOOK_CURIE}7\n"));
        booking_number(&stdout).expect("no booking number in output")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the workbook file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("magnolia.db")
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Extract the booking number printed after a successful booking.
pub fn booking_number(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Booking number: "))
        .map(str::to_string)
}
