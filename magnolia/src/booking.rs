//! Passenger bookings and their table representation.
//!
//! A booking is one row of a per-flight table. Columns are always looked up
//! by header, so a table may order its columns freely or carry extra ones.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::luggage::Luggage;
use crate::store::{require_column, Record, TableStore};
use crate::validation::{FieldKind, FieldValue, Rejection, Validator};

/// Header of the booking reference column.
pub const BOOKING_NUMBER: &str = "booking number";
/// Header of the checked-in column.
pub const CHECKED_IN: &str = "checked in";

/// Cell text for a checked-in booking.
pub const CHECKED_IN_TRUE: &str = "TRUE";
/// Cell text for a booking that has not checked in.
pub const CHECKED_IN_FALSE: &str = "FALSE";

/// Headers of a per-flight table, in default column order.
pub const PASSENGER_HEADERS: [&str; 8] = [
    "first name",
    "last name",
    "date of birth",
    "passport number",
    "nationality",
    "luggage",
    BOOKING_NUMBER,
    CHECKED_IN,
];

/// Check-in state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// Booked; details and luggage may still change.
    Booked,
    /// Checked in; the booking is locked.
    CheckedIn,
}

impl BookingState {
    /// Parses a checked-in cell. An empty cell counts as not checked in.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::BookingState;
    ///
    /// assert_eq!(BookingState::from_cell("TRUE"), Some(BookingState::CheckedIn));
    /// assert_eq!(BookingState::from_cell("false"), Some(BookingState::Booked));
    /// assert_eq!(BookingState::from_cell("maybe"), None);
    /// ```
    #[must_use]
    pub fn from_cell(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(CHECKED_IN_TRUE) {
            Some(Self::CheckedIn)
        } else if value.is_empty() || value.eq_ignore_ascii_case(CHECKED_IN_FALSE) {
            Some(Self::Booked)
        } else {
            None
        }
    }

    /// The cell text for this state.
    #[must_use]
    pub const fn as_cell(self) -> &'static str {
        match self {
            Self::Booked => CHECKED_IN_FALSE,
            Self::CheckedIn => CHECKED_IN_TRUE,
        }
    }

    /// Returns `true` once checked in.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::CheckedIn)
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked => write!(f, "booked"),
            Self::CheckedIn => write!(f, "checked in"),
        }
    }
}

/// A passenger's validated personal details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Given name(s), title-cased.
    pub given_names: String,
    /// Surname, title-cased.
    pub surname: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Passport number, uppercase.
    pub passport: String,
    /// Nationality, uppercase country name.
    pub nationality: String,
    /// Checked bags.
    pub luggage: Luggage,
}

impl Passenger {
    /// Creates a builder that collects validated field values.
    #[must_use]
    pub fn builder() -> PassengerBuilder {
        PassengerBuilder::default()
    }

    /// Validates every field from raw operator input in one go.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use magnolia::validation::Validator;
    /// use magnolia::Passenger;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let passenger = Passenger::from_raw(
    ///     &Validator::new(),
    ///     ["marie", "curie", "1867-11-07", "ab123cd45", "france", "1"],
    ///     today,
    /// )
    /// .unwrap();
    /// assert_eq!(passenger.full_name(), "Marie Curie");
    /// ```
    pub fn from_raw(
        validator: &Validator,
        raw: [&str; 6],
        today: NaiveDate,
    ) -> std::result::Result<Self, Rejection> {
        let mut builder = Self::builder();
        for (kind, input) in FieldKind::ALL.into_iter().zip(raw) {
            builder = builder.set(kind, validator.validate_on(kind, input, today)?);
        }
        builder.build().map_err(|e| Rejection {
            field: FieldKind::GivenNames,
            reason: e.to_string(),
        })
    }

    /// Given names and surname, separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surname)
    }

    /// The stored text of one detail field.
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::GivenNames => self.given_names.clone(),
            FieldKind::Surname => self.surname.clone(),
            FieldKind::DateOfBirth => self.date_of_birth.clone(),
            FieldKind::Passport => self.passport.clone(),
            FieldKind::Nationality => self.nationality.clone(),
            FieldKind::Luggage => self.luggage.to_string(),
        }
    }
}

/// Builder for [`Passenger`] from validated field values.
///
/// # Examples
///
/// ```
/// use magnolia::validation::{validate, FieldKind};
/// use magnolia::Passenger;
///
/// let mut builder = Passenger::builder();
/// for (kind, raw) in [
///     (FieldKind::GivenNames, "ada"),
///     (FieldKind::Surname, "lovelace"),
///     (FieldKind::DateOfBirth, "1815-12-10"),
///     (FieldKind::Passport, "gb1815"),
///     (FieldKind::Nationality, "united kingdom"),
///     (FieldKind::Luggage, "0"),
/// ] {
///     builder = builder.set(kind, validate(kind, raw).unwrap());
/// }
/// let passenger = builder.build().unwrap();
/// assert_eq!(passenger.passport, "GB1815");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PassengerBuilder {
    values: HashMap<FieldKind, FieldValue>,
}

impl PassengerBuilder {
    /// Records the validated value of one field.
    #[must_use]
    pub fn set(mut self, kind: FieldKind, value: FieldValue) -> Self {
        self.values.insert(kind, value);
        self
    }

    /// Returns `true` once a value has been recorded for `kind`.
    #[must_use]
    pub fn has(&self, kind: FieldKind) -> bool {
        self.values.contains_key(&kind)
    }

    fn take_text(&mut self, kind: FieldKind) -> Result<String> {
        match self.values.remove(&kind) {
            Some(FieldValue::Text(text)) => Ok(text),
            Some(FieldValue::Luggage(_)) => Err(Error::Validation {
                field: kind.to_string(),
                message: "expected text, found a luggage count".into(),
            }),
            None => Err(missing(kind)),
        }
    }

    /// Builds the passenger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any field has not been set.
    pub fn build(mut self) -> Result<Passenger> {
        let luggage = match self.values.remove(&FieldKind::Luggage) {
            Some(FieldValue::Luggage(luggage)) => luggage,
            Some(FieldValue::Text(text)) => text.parse::<Luggage>()?,
            None => return Err(missing(FieldKind::Luggage)),
        };
        Ok(Passenger {
            given_names: self.take_text(FieldKind::GivenNames)?,
            surname: self.take_text(FieldKind::Surname)?,
            date_of_birth: self.take_text(FieldKind::DateOfBirth)?,
            passport: self.take_text(FieldKind::Passport)?,
            nationality: self.take_text(FieldKind::Nationality)?,
            luggage,
        })
    }
}

fn missing(kind: FieldKind) -> Error {
    Error::Validation {
        field: kind.to_string(),
        message: "no value provided".into(),
    }
}

/// A booking as stored in a per-flight table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerBooking {
    /// The flight (and table) the booking belongs to.
    pub flight: String,
    /// The 1-based row of the booking in its table.
    pub row: usize,
    /// The passenger's details.
    #[serde(flatten)]
    pub passenger: Passenger,
    /// The booking reference.
    pub reference: String,
    /// Check-in state.
    pub state: BookingState,
}

impl PassengerBooking {
    /// Reads a booking from a per-flight table row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] if a column is missing, or the
    /// luggage or checked-in cell cannot be parsed.
    pub fn from_record(table: &str, record: &Record) -> Result<Self> {
        let text = |kind: FieldKind| -> Result<String> {
            Ok(record.require(table, kind.header())?.to_string())
        };
        let malformed = |details: String| Error::MalformedTable {
            table: table.to_string(),
            details: format!("row {}: {details}", record.row()),
        };

        let luggage_cell = record.require(table, FieldKind::Luggage.header())?;
        let luggage = if luggage_cell.trim().is_empty() {
            Luggage::default()
        } else {
            luggage_cell
                .parse::<Luggage>()
                .map_err(|e| malformed(e.to_string()))?
        };

        let checked_in = record.require(table, CHECKED_IN)?;
        let state = BookingState::from_cell(checked_in)
            .ok_or_else(|| malformed(format!("'{checked_in}' is not TRUE or FALSE")))?;

        Ok(Self {
            flight: table.to_string(),
            row: record.row(),
            passenger: Passenger {
                given_names: text(FieldKind::GivenNames)?,
                surname: text(FieldKind::Surname)?,
                date_of_birth: text(FieldKind::DateOfBirth)?,
                passport: text(FieldKind::Passport)?,
                nationality: text(FieldKind::Nationality)?,
                luggage,
            },
            reference: record.require(table, BOOKING_NUMBER)?.to_string(),
            state,
        })
    }

    /// Returns `true` once the booking is checked in.
    #[must_use]
    pub const fn is_checked_in(&self) -> bool {
        self.state.is_locked()
    }

    /// The cell text for `header`, if this booking has such a column.
    #[must_use]
    pub fn cell(&self, header: &str) -> Option<String> {
        if header == BOOKING_NUMBER {
            return Some(self.reference.clone());
        }
        if header == CHECKED_IN {
            return Some(self.state.as_cell().to_string());
        }
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.header() == header)
            .map(|kind| self.passenger.field(kind))
    }
}

/// Lays out a fresh booking row to match `table`'s actual column order.
///
/// # Errors
///
/// Returns [`Error::MalformedTable`] if the table lacks a passenger column.
pub fn passenger_row<S: TableStore + ?Sized>(
    store: &S,
    table: &str,
    passenger: &Passenger,
    reference: &str,
) -> Result<Vec<String>> {
    let mut placed: Vec<(usize, String)> = Vec::with_capacity(PASSENGER_HEADERS.len());
    for kind in FieldKind::ALL {
        placed.push((
            require_column(store, table, kind.header())?,
            passenger.field(kind),
        ));
    }
    placed.push((require_column(store, table, BOOKING_NUMBER)?, reference.to_string()));
    placed.push((
        require_column(store, table, CHECKED_IN)?,
        BookingState::Booked.as_cell().to_string(),
    ));

    let width = placed.iter().map(|(column, _)| *column).max().unwrap_or(0);
    let mut row = vec![String::new(); width];
    for (column, value) in placed {
        row[column - 1] = value;
    }
    Ok(row)
}
