//! Book command implementation.
//!
//! This module implements the booking workflow: pick a destination, pick a
//! flight to it, collect the passenger's details, then issue a booking
//! number and append the booking.

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::render::flight_line;
use crate::step;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::flight::{destinations, flights_to};
use magnolia::validation::FieldKind;
use magnolia::{book_passenger, BookingRequest, Flight, Passenger, ReferenceGenerator};
use std::io::{BufRead, Write};

/// Book a ticket.
#[derive(Args, Default)]
pub struct BookCommand {}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        super::run_once(global, run)
    }
}

/// Runs the booking workflow.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    let available = destinations(&desk.db)?;
    if available.is_empty() {
        console.say("No flights are scheduled.")?;
        return Ok(Step::Done(()));
    }
    console.say(format!("Destinations: {}", available.join(", ")))?;

    let flights = step!(choose_destination(desk, console));
    let flight = step!(choose_flight(console, &flights));

    console.say(format!("Passenger details for {}:", flight.number))?;
    let mut builder = Passenger::builder();
    for kind in FieldKind::ALL {
        let value = step!(console.ask_field(&desk.validator, kind));
        builder = builder.set(kind, value);
    }
    let passenger = builder.build()?;

    console.say(format!(
        "{} on {}, {} bag(s).",
        passenger.full_name(),
        flight,
        passenger.luggage
    ))?;
    if !step!(console.confirm("Confirm booking?")) {
        return Ok(Step::Cancelled);
    }

    let mut generator = ReferenceGenerator::from_thread_rng();
    let confirmation = book_passenger(
        &mut desk.db,
        &mut generator,
        &BookingRequest::new(flight.number.clone(), passenger),
    )?;

    console.say(format!(
        "Booking confirmed for {} on {}.",
        confirmation.passenger.full_name(),
        confirmation.flight
    ))?;
    console.say(format!("Booking number: {}", confirmation.reference))?;
    Ok(Step::Done(()))
}

fn choose_destination<R: BufRead, W: Write>(
    desk: &Desk,
    console: &mut Console<R, W>,
) -> Result<Step<Vec<Flight>>, CliError> {
    loop {
        let destination = step!(console.ask("Destination"));
        let flights = flights_to(&desk.db, &destination)?;
        if !flights.is_empty() {
            return Ok(Step::Done(flights));
        }
        console.say(format!(
            "There are no flights to '{destination}'. Please choose a listed destination."
        ))?;
    }
}

fn choose_flight<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    flights: &[Flight],
) -> Result<Step<Flight>, CliError> {
    for flight in flights {
        console.say(format!("  {}", flight_line(flight)))?;
    }
    loop {
        let number = step!(console.ask("Flight number"));
        if let Some(flight) = flights
            .iter()
            .find(|f| f.number.eq_ignore_ascii_case(&number))
        {
            return Ok(Step::Done(flight.clone()));
        }
        console.say(format!(
            "'{number}' is not one of the listed flights. Please try again."
        ))?;
    }
}
