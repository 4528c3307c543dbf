//! Check-in command implementation.

use crate::console::{Console, Step};
use crate::desk::Desk;
use crate::error::CliError;
use crate::step;
use crate::utils::GlobalOptions;
use clap::Args;
use magnolia::{check_in, CheckInOutcome};
use std::io::{BufRead, Write};

/// Check a passenger in.
#[derive(Args, Default)]
pub struct CheckInCommand {}

impl CheckInCommand {
    /// Execute the check-in command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        super::run_once(global, run)
    }
}

/// Identifies a booking and checks it in.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<Step<()>, CliError> {
    let located = step!(desk.identify(console));

    match check_in(&mut desk.db, &located)? {
        CheckInOutcome::CheckedIn => console.say(format!(
            "{} {} is checked in for flight {}. Have a pleasant journey!",
            located.given_names, located.surname, located.table
        ))?,
        CheckInOutcome::AlreadyCheckedIn => console.say(format!(
            "Booking {} is already checked in.",
            located.reference
        ))?,
    }
    Ok(Step::Done(()))
}
