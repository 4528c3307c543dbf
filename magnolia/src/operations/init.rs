//! Workbook initialization.
//!
//! This module creates the data directory and workbook, lays down the
//! administrative tables, and imports flights together with their empty
//! passenger tables. It supports overwriting an existing workbook and
//! writing a commented configuration template.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::booking::{BOOKING_NUMBER, PASSENGER_HEADERS};
use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};
use crate::flight::{Flight, FLIGHT_HEADERS, FLIGHT_NUMBER};
use crate::store::{TableStore, FLIGHTS_TABLE, REGISTRY_TABLE};

/// Options for workbook initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite an existing workbook.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
    /// Flights to import.
    pub flights: Vec<Flight>,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            flights: Vec::new(),
        }
    }

    /// Sets whether to overwrite an existing workbook.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets the flights to import.
    #[must_use]
    pub fn with_flights(mut self, flights: Vec<Flight>) -> Self {
        self.flights = flights;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the workbook was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// What seeding the workbook did.
    pub seed: SeedResult,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Result of seeding a workbook with flights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedResult {
    /// Flight numbers appended to the `flights` table.
    pub flights_added: Vec<String>,
    /// Flight numbers skipped because they were already listed.
    pub flights_skipped: Vec<String>,
    /// Every table created, administrative ones included.
    pub tables_created: Vec<String>,
}

/// Default configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Magnolia configuration file

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create a workbook on first use (default: false)
# disable_autoinit: false

# Default listing format: table, json or csv (default: table)
# output_format: table

# Nationalities accepted in addition to the built-in country list
# extra_nationalities:
#   - ATLANTIS
";

/// Ensures the administrative tables exist and adds `flights`, each with an
/// empty passenger table.
///
/// Flights already listed (by flight number, case-insensitive) are skipped.
/// Everything happens inside [`TableStore::atomically`].
///
/// # Errors
///
/// Returns an error if a table cannot be created or written, or if a
/// passenger table for a new flight already exists without the flight.
pub fn seed_workbook<S: TableStore>(store: &mut S, flights: &[Flight]) -> Result<SeedResult> {
    store.atomically(|store| {
        let mut result = SeedResult::default();

        if !store.has_table(FLIGHTS_TABLE)? {
            store.create_table(FLIGHTS_TABLE, &FLIGHT_HEADERS)?;
            result.tables_created.push(FLIGHTS_TABLE.to_string());
        }
        if !store.has_table(REGISTRY_TABLE)? {
            store.create_table(REGISTRY_TABLE, &[BOOKING_NUMBER])?;
            result.tables_created.push(REGISTRY_TABLE.to_string());
        }

        let mut known: HashSet<String> = store
            .get_all_rows(FLIGHTS_TABLE)?
            .iter()
            .filter_map(|record| record.get(FLIGHT_NUMBER))
            .map(str::to_uppercase)
            .collect();

        for flight in flights {
            if !known.insert(flight.number.to_uppercase()) {
                result.flights_skipped.push(flight.number.clone());
                continue;
            }

            store.append_row(FLIGHTS_TABLE, &flight.to_row())?;
            result.flights_added.push(flight.number.clone());

            if !store.has_table(&flight.number)? {
                store.create_table(&flight.number, &PASSENGER_HEADERS)?;
                result.tables_created.push(flight.number.clone());
            }
        }

        log::info!(
            "seeded workbook: {} flight(s) added, {} skipped",
            result.flights_added.len(),
            result.flights_skipped.len()
        );
        Ok(result)
    })
}

/// Initializes the data directory and workbook.
///
/// This function creates the data directory if needed, creates the
/// workbook, seeds it with the given flights, and optionally writes a
/// default configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The workbook cannot be created or seeded
/// - The configuration file cannot be written
/// - Overwrite is false and the workbook already exists
///
/// # Examples
///
/// ```no_run
/// use magnolia::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/magnolia-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Workbook created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        seed: SeedResult::default(),
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Workbook already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists {
        fs::remove_file(&db_path)?;
        for suffix in ["-wal", "-shm"] {
            let side = options
                .data_dir
                .join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if side.exists() {
                fs::remove_file(side)?;
            }
        }
    }

    let mut db = Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;
    result.seed = seed_workbook(&mut db, &options.flights)?;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
