//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `menu`: Interactive numbered menu (the default)
//! - `init`: Create the workbook, optionally importing flights
//! - `flights`: List scheduled flights
//! - `passengers`: List the passengers on one flight
//! - `book`: Book a ticket
//! - `details`: View or update a passenger's details
//! - `check_in`: Check a passenger in
//! - `add_luggage`: Add checked bags to a booking
//! - `completions`: Generate shell completion scripts
//!
//! The desk operations expose a `run` function that drives a [`Console`]
//! so the menu and the one-shot commands share one implementation.
//!
//! [`Console`]: crate::console::Console

pub mod add_luggage;
pub mod book;
pub mod check_in;
pub mod completions;
pub mod details;
pub mod flights;
pub mod init;
pub mod menu;
pub mod passengers;

pub use add_luggage::AddLuggageCommand;
pub use book::BookCommand;
pub use check_in::CheckInCommand;
pub use completions::CompletionsCommand;
pub use details::DetailsCommand;
pub use flights::FlightsCommand;
pub use init::InitCommand;
pub use menu::MenuCommand;
pub use passengers::PassengersCommand;

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use std::io::{BufRead, Write};

/// A desk operation driven through a console.
type Operation = fn(
    &mut Desk,
    &mut Console<std::io::StdinLock<'static>, std::io::Stdout>,
) -> Result<Step<()>, CliError>;

/// Runs one desk operation on standard input and output.
fn run_once(global: &GlobalOptions, operation: Operation) -> Result<(), CliError> {
    let mut desk = Desk::open(global)?;
    let mut console = Console::stdio();
    if operation(&mut desk, &mut console)? == Step::Cancelled {
        console.say("Cancelled.")?;
    }
    Ok(())
}

/// Lists the flights, so the operator can pick one.
fn show_flights<R: BufRead, W: Write>(
    desk: &Desk,
    console: &mut Console<R, W>,
) -> Result<usize, CliError> {
    let flights = magnolia::flight::list_flights(&desk.db)?;
    for flight in &flights {
        console.say(format!("  {}", crate::render::flight_line(flight)))?;
    }
    Ok(flights.len())
}
