//! Add-luggage command implementation.
//!
//! Bags can only be added, up to the allowance, and only before check-in.

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::step;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::{add_luggage, passenger_details, Error, Luggage};
use std::io::{BufRead, Write};

/// Add checked bags to a booking.
#[derive(Args, Default)]
pub struct AddLuggageCommand {}

impl AddLuggageCommand {
    /// Execute the add-luggage command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        super::run_once(global, run)
    }
}

/// Identifies a booking and raises its bag count.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    let located = step!(desk.identify(console));

    let booking = passenger_details(&desk.db, &located)?;
    if booking.is_checked_in() {
        return Err(Error::StateConflict {
            reference: located.reference,
        }
        .into());
    }
    let current = booking.passenger.luggage;
    if current.is_at_maximum() {
        return Err(Error::LuggageAtMaximum {
            reference: located.reference,
            max: Luggage::MAX,
        }
        .into());
    }

    let remaining = current.remaining();
    console.say(format!(
        "Booking {} has {current} bag(s); up to {remaining} more can be added.",
        located.reference
    ))?;

    let additional = loop {
        let answer = step!(console.ask(&format!("Bags to add (1-{remaining})")));
        match answer.parse::<u8>() {
            Ok(n) if (1..=remaining).contains(&n) => break n,
            _ => console.say(format!("Please enter a number from 1 to {remaining}."))?,
        }
    };

    let updated = add_luggage(&mut desk.db, &located, additional)?;
    console.say(format!(
        "Booking {} now has {updated} bag(s).",
        located.reference
    ))?;
    Ok(Step::Done(()))
}
