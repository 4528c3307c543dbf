//! Shared state for desk operations and the steps they have in common.

use crate::console::{Console, Step};
use crate::error::CliError;
use crate::step;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use magnolia::config::OutputFormat;
use magnolia::validation::FieldKind;
use magnolia::{locate, Config, Database, LocatedBooking, Location, Validator};
use std::io::{BufRead, Write};

/// An open workbook plus the settings operations need.
pub struct Desk {
    /// The workbook.
    pub db: Database,
    /// Field validator, including configured extra nationalities.
    pub validator: Validator,
    /// Listing format for one-shot commands.
    pub format: OutputFormat,
}

impl Desk {
    /// Loads configuration and opens the workbook.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        Ok(Self::new(db, &config))
    }

    /// Wraps an already open workbook.
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            validator: config.validator(),
            format: config.output_format(),
        }
    }

    /// Asks for a booking number and surname until they identify a booking.
    ///
    /// The surname is formatted like a stored surname before the exact
    /// comparison, so `curie` finds a booking for `Curie`.
    pub fn identify<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Step<LocatedBooking>, CliError> {
        loop {
            let reference = step!(console.ask("Booking number"));
            let reference = reference.to_ascii_uppercase();
            let surname = step!(console.ask_field(&self.validator, FieldKind::Surname));

            match locate(&self.db, &reference, &surname.to_cell())? {
                Location::Found(located) => return Ok(Step::Done(located)),
                Location::NotFound => {
                    console.say(format!("No booking with number '{reference}' was found."))?;
                }
                Location::Mismatch => {
                    console.say(format!(
                        "The last name does not match booking {reference}."
                    ))?;
                }
            }
            console.say(format!(
                "Please try again, or type '{}' to return to the menu.",
                crate::console::RETURN_TO_MENU
            ))?;
        }
    }
}
