//! Passengers command implementation.
//!
//! This module implements the `passengers` command, which lists every
//! booking on one flight.

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::render::write_passengers;
use crate::step;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::config::OutputFormat;
use magnolia::list_passengers;
use std::io::{BufRead, Write};

/// List the passengers booked on a flight.
#[derive(Args)]
pub struct PassengersCommand {
    /// Flight number, e.g. MA101
    #[arg(value_name = "FLIGHT")]
    pub flight: String,

    /// Output format: table, json or csv (defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl PassengersCommand {
    /// Execute the passengers command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let desk = Desk::open(global)?;
        let passengers = list_passengers(&desk.db, &self.flight)?;
        let format = self.format.unwrap_or(desk.format);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_passengers(&mut handle, &passengers, format)
    }
}

/// Menu option: ask for a flight and show its passengers.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    if super::show_flights(desk, console)? == 0 {
        console.say("No flights are scheduled.")?;
        return Ok(Step::Done(()));
    }

    loop {
        let number = step!(console.ask("Flight number"));
        match list_passengers(&desk.db, &number) {
            Ok(passengers) if passengers.is_empty() => {
                console.say(format!("No passengers are booked on {}.", number.to_uppercase()))?;
                return Ok(Step::Done(()));
            }
            Ok(passengers) => {
                write_passengers(console.out(), &passengers, OutputFormat::Table)?;
                return Ok(Step::Done(()));
            }
            Err(magnolia::Error::NotFound { .. }) => {
                console.say(format!("There is no flight '{number}'. Please try again."))?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
