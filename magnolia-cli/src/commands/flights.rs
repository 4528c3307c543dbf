//! Flights command implementation.
//!
//! This module implements the `flights` command, which lists scheduled
//! flights in various formats (table, JSON, CSV).

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::render::write_flights;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::config::OutputFormat;
use magnolia::flight::list_flights;
use std::io::{BufRead, Write};

/// List scheduled flights.
#[derive(Args, Default)]
pub struct FlightsCommand {
    /// Output format: table, json or csv (defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FlightsCommand {
    /// Execute the flights command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = Desk::open(global)?;
        let flights = list_flights(&desk.db)?;
        let format = self.format.unwrap_or(desk.format);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_flights(&mut handle, &flights, format)
    }
}

/// Menu option: show every flight as a table.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    let flights = list_flights(&desk.db)?;
    if flights.is_empty() {
        console.say("No flights are scheduled.")?;
    } else {
        write_flights(console.out(), &flights, OutputFormat::Table)?;
    }
    Ok(Step::Done(()))
}
