//! Details command implementation.
//!
//! Shows a located booking and, while it is not checked in, lets the
//! operator correct one detail field at a time.

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::render::write_booking;
use crate::step;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::validation::FieldKind;
use magnolia::{passenger_details, update_detail, LocatedBooking};
use std::io::{BufRead, Write};

/// View or update a passenger's details.
#[derive(Args, Default)]
pub struct DetailsCommand {}

impl DetailsCommand {
    /// Execute the details command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        super::run_once(global, run)
    }
}

/// Identifies a booking, shows it, then offers detail updates.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    let mut located = step!(desk.identify(console));

    let booking = passenger_details(&desk.db, &located)?;
    write_booking(console.out(), &booking)?;
    if booking.is_checked_in() {
        console.say(format!(
            "Booking {} is checked in; its details can no longer be changed.",
            located.reference
        ))?;
        return Ok(Step::Done(()));
    }

    while let Some(kind) = step!(choose_field(console)) {
        let value = step!(console.ask_field(&desk.validator, kind));
        let stored = update_detail(&mut desk.db, &desk.validator, &located, kind, &value.to_cell())?;
        track_identity(&mut located, kind, &stored.to_cell());
        console.say(format!("Updated {kind} to {stored}."))?;
    }

    Ok(Step::Done(()))
}

/// Asks which field to change; `None` when the operator is finished.
fn choose_field<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Step<Option<FieldKind>>, CliError> {
    console.say("Fields you can update:")?;
    for (index, kind) in FieldKind::UPDATABLE.iter().enumerate() {
        console.say(format!("  {}. {kind}", index + 1))?;
    }

    let count = FieldKind::UPDATABLE.len();
    loop {
        let choice = step!(console.ask(&format!(
            "Field to update (1-{count}, or press Enter when finished)"
        )));
        if choice.is_empty() {
            return Ok(Step::Done(None));
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                return Ok(Step::Done(Some(FieldKind::UPDATABLE[n - 1])));
            }
            _ => console.say(format!("Please enter a number from 1 to {count}."))?,
        }
    }
}

fn track_identity(located: &mut LocatedBooking, kind: FieldKind, value: &str) {
    match kind {
        FieldKind::GivenNames => located.given_names = value.to_string(),
        FieldKind::Surname => located.surname = value.to_string(),
        _ => {}
    }
}
