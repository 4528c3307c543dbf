//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the magnolia data directory and workbook, optionally importing the
//! flight schedule from a CSV file.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, shorten_path, GlobalOptions};
use clap::Parser;
use magnolia::database::DATABASE_FILE_NAME;
use magnolia::operations::init::{init_database, InitOptions};
use magnolia::Flight;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Initialize the magnolia data directory and workbook.
#[derive(Parser)]
#[command(about = "Initialize the magnolia data directory and workbook")]
pub struct InitCommand {
    /// CSV file with the columns: flight number, destination, date,
    /// departure time, arrival time
    #[arg(long, value_name = "FILE")]
    flights: Option<PathBuf>,

    /// Overwrite existing workbook
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

/// One row of a flight schedule file.
#[derive(Debug, Deserialize)]
struct FlightRecord {
    #[serde(rename = "flight number")]
    number: String,
    destination: String,
    date: String,
    #[serde(rename = "departure time")]
    departure: String,
    #[serde(rename = "arrival time")]
    arrival: String,
}

/// Read and check a flight schedule file.
///
/// # Errors
///
/// Returns `InvalidArguments` naming the file and line of the first
/// unreadable or invalid row.
pub fn read_flights(path: &Path) -> Result<Vec<Flight>, CliError> {
    let invalid = |detail: String| CliError::InvalidArguments(format!("{}: {detail}", path.display()));

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| invalid(e.to_string()))?;

    let mut flights = Vec::new();
    for (index, row) in reader.deserialize::<FlightRecord>().enumerate() {
        // header is line 1
        let line = index + 2;
        let record = row.map_err(|e| invalid(format!("line {line}: {e}")))?;
        let flight = Flight::parse(
            &record.number,
            &record.destination,
            &record.date,
            &record.departure,
            &record.arrival,
        )
        .map_err(|e| invalid(format!("line {line}: {e}")))?;
        flights.push(flight);
    }
    Ok(flights)
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: This command ignores --disable-autoinit (it would be paradoxical).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let flights = match self.flights {
            Some(ref path) => read_flights(path)?,
            None => Vec::new(),
        };

        if self.dry_run {
            self.preview(&data_dir, &flights);
            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_flights(flights);

        let result = init_database(&options)?;

        println!("Initialized magnolia in: {}", shorten_path(&result.data_dir));

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated workbook");
            } else {
                println!("  - Created workbook");
            }
        }

        if !result.seed.flights_added.is_empty() {
            println!(
                "  - Imported {} flight(s): {}",
                result.seed.flights_added.len(),
                result.seed.flights_added.join(", ")
            );
        }
        for number in &result.seed.flights_skipped {
            println!("  - Skipped duplicate flight {number}");
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }

    fn preview(&self, data_dir: &Path, flights: &[Flight]) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize magnolia in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        let db_path = data_dir.join(DATABASE_FILE_NAME);
        if db_path.exists() {
            if self.overwrite {
                println!("  - Remove existing workbook: {}", db_path.display());
                println!("  - Create new workbook: {}", db_path.display());
            } else {
                println!(
                    "  - ERROR: Workbook already exists (use --overwrite to replace): {}",
                    db_path.display()
                );
            }
        } else {
            println!("  - Create workbook: {}", db_path.display());
        }

        if !flights.is_empty() {
            println!("  - Import {} flight(s)", flights.len());
        }

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}
