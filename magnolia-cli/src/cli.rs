//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddLuggageCommand, BookCommand, CheckInCommand, CompletionsCommand, DetailsCommand,
    FlightsCommand, InitCommand, MenuCommand, PassengersCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal booking desk for Magnolia Air.
#[derive(Parser)]
#[command(name = "magnolia")]
#[command(version, about = "Book, check in and manage Magnolia Air passengers", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MAGNOLIA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "MAGNOLIA_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic workbook initialization
    #[arg(long, global = true, env = "MAGNOLIA_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Command to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive booking desk menu
    Menu(MenuCommand),

    /// Initialize the data directory and workbook
    Init(InitCommand),

    /// List scheduled flights
    Flights(FlightsCommand),

    /// List the passengers booked on a flight
    Passengers(PassengersCommand),

    /// Book a ticket
    Book(BookCommand),

    /// View or update a passenger's details
    Details(DetailsCommand),

    /// Check a passenger in
    CheckIn(CheckInCommand),

    /// Add checked bags to a booking
    AddLuggage(AddLuggageCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
