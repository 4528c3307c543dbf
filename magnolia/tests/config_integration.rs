//! Integration tests for the configuration system.
//!
//! These tests cover file discovery, layer precedence, environment
//! variables and the hand-off from configuration to the field validator.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so concurrent access would
//! race.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use magnolia::config::{Config, ConfigBuilder, OutputFormat};
use magnolia::validation::FieldKind;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every MAGNOLIA_* configuration variable for the guard's lifetime.
fn clear_magnolia_env_vars() -> Vec<EnvGuard> {
    [
        "MAGNOLIA_MAXIMUM_LOCK_WAIT_SECONDS",
        "MAGNOLIA_DISABLE_AUTOINIT",
        "MAGNOLIA_OUTPUT_FORMAT",
        "MAGNOLIA_EXTRA_NATIONALITIES",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_project_config_found_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("terminal").join("desk");
    fs::create_dir_all(&nested).unwrap();
    write(temp.path(), "magnolia.yaml", "output_format: csv\n");

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_data_dir(&temp.path().join("no-data"))
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Csv);
}

#[test]
fn test_project_config_overrides_user_config() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let project = temp.path().join("project");
    write(
        &data_dir,
        "config.yaml",
        "maximum_lock_wait_seconds: 20\noutput_format: json\nextra_nationalities: [Atlantis]\n",
    );
    write(
        &project,
        "magnolia.yaml",
        "output_format: table\nextra_nationalities: [Lemuria]\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(&project)
        .with_data_dir(&data_dir)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.maximum_lock_wait_seconds, Some(20));
    assert_eq!(config.output_format(), OutputFormat::Table);

    let validator = config.validator();
    assert!(validator.validate(FieldKind::Nationality, "atlantis").is_ok());
    assert!(validator.validate(FieldKind::Nationality, "lemuria").is_ok());
}

#[test]
fn test_unknown_field_in_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "magnolia.yaml", "seat_map: true\n");

    let result = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_data_dir(temp.path())
        .skip_env()
        .build();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_files() {
    let _clean = clear_magnolia_env_vars();
    let temp = TempDir::new().unwrap();
    write(temp.path(), "magnolia.yaml", "maximum_lock_wait_seconds: 3\n");
    let _timeout = EnvGuard::new("MAGNOLIA_MAXIMUM_LOCK_WAIT_SECONDS", "9");
    let _autoinit = EnvGuard::new("MAGNOLIA_DISABLE_AUTOINIT", "yes");

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_data_dir(temp.path())
        .build()
        .unwrap();

    assert_eq!(config.maximum_lock_wait_seconds, Some(9));
    assert!(config.autoinit_disabled());
}

#[test]
#[serial]
fn test_programmatic_layer_wins() {
    let _clean = clear_magnolia_env_vars();
    let _format = EnvGuard::new("MAGNOLIA_OUTPUT_FORMAT", "csv");

    let config = ConfigBuilder::new()
        .skip_files()
        .with_config(Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Json);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_reported() {
    let _clean = clear_magnolia_env_vars();
    let _format = EnvGuard::new("MAGNOLIA_OUTPUT_FORMAT", "yaml");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(err.to_string().contains("MAGNOLIA_OUTPUT_FORMAT"));
}
