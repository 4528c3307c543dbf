//! Interactive menu.
//!
//! The menu loops until the operator exits or input ends. Each option runs
//! one desk operation; a failed operation is reported and the menu shown
//! again.

use crate::console::{Console, Step, RETURN_TO_MENU};
use crate::desk::Desk;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::io::{BufRead, Write};

const MENU: &str = "\
Magnolia Air booking desk
  1. View flights
  2. View passengers on a flight
  3. Book a ticket
  4. View or update passenger details
  5. Check in
  6. Add luggage
  7. Exit";

/// Run the interactive booking desk menu.
#[derive(Args, Default)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut desk = Desk::open(global)?;
        let mut console = Console::stdio();
        run_menu(&mut desk, &mut console)
    }
}

/// Shows the menu and dispatches choices until exit.
pub fn run_menu<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    loop {
        console.say("")?;
        console.say(MENU)?;
        let Some(choice) = console.read_line("Choose an option (1-7)")? else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => super::flights::run(desk, console),
            "2" => super::passengers::run(desk, console),
            "3" => super::book::run(desk, console),
            "4" => super::details::run(desk, console),
            "5" => super::check_in::run(desk, console),
            "6" => super::add_luggage::run(desk, console),
            "7" => {
                console.say("Goodbye.")?;
                return Ok(());
            }
            other if other.is_empty() || other == RETURN_TO_MENU => continue,
            _ => {
                console.say("Please enter a number from 1 to 7.")?;
                continue;
            }
        };

        match outcome {
            Ok(Step::Done(())) => {}
            Ok(Step::Cancelled) => console.say("Returning to the main menu.")?,
            // input is gone or the terminal is broken; nothing left to serve
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                log::debug!("operation failed: {e:?}");
                console.say(format!("Error: {e}"))?;
            }
        }
    }
}
