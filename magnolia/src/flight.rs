//! The flight catalogue.
//!
//! Flights live in the `flights` table, one row per flight, and are only
//! read by the booking workflow. Each flight number also names the
//! per-flight table that holds its passengers.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{Record, TableStore, FLIGHTS_TABLE};
use crate::validation::DATE_FORMAT;

/// Header of the flight number column.
pub const FLIGHT_NUMBER: &str = "flight number";
/// Header of the destination column.
pub const DESTINATION: &str = "destination";
/// Header of the departure date column.
pub const DATE: &str = "date";
/// Header of the departure time column.
pub const DEPARTURE_TIME: &str = "departure time";
/// Header of the arrival time column.
pub const ARRIVAL_TIME: &str = "arrival time";

/// Headers of the `flights` table, in default column order.
pub const FLIGHT_HEADERS: [&str; 5] = [FLIGHT_NUMBER, DESTINATION, DATE, DEPARTURE_TIME, ARRIVAL_TIME];

/// Time format for departure and arrival times.
pub const TIME_FORMAT: &str = "%H:%M";

/// A scheduled flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number, also the name of the flight's passenger table.
    pub number: String,
    /// Destination city.
    pub destination: String,
    /// Departure date.
    pub date: NaiveDate,
    /// Departure time, `HH:MM`.
    pub departure: String,
    /// Arrival time, `HH:MM`.
    pub arrival: String,
}

impl Flight {
    /// Builds a flight from raw text fields, checking dates and times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the number or destination is blank,
    /// the date is not `YYYY-MM-DD`, or a time is not `HH:MM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::Flight;
    ///
    /// let flight = Flight::parse("MA101", "Paris", "2025-07-01", "08:15", "10:30").unwrap();
    /// assert_eq!(flight.to_string(), "MA101 to Paris on 2025-07-01, 08:15-10:30");
    ///
    /// assert!(Flight::parse("MA101", "Paris", "01/07/2025", "08:15", "10:30").is_err());
    /// ```
    pub fn parse(
        number: &str,
        destination: &str,
        date: &str,
        departure: &str,
        arrival: &str,
    ) -> Result<Self> {
        let number = number.trim();
        let destination = destination.trim();
        if number.is_empty() {
            return Err(invalid(FLIGHT_NUMBER, "flight number cannot be empty"));
        }
        if crate::store::is_administrative_table(number) {
            return Err(invalid(
                FLIGHT_NUMBER,
                format!("'{number}' is reserved for an administrative table"),
            ));
        }
        if destination.is_empty() {
            return Err(invalid(DESTINATION, "destination cannot be empty"));
        }

        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|e| invalid(DATE, format!("'{}' is not a YYYY-MM-DD date: {e}", date.trim())))?;

        Ok(Self {
            number: number.to_string(),
            destination: destination.to_string(),
            date,
            departure: parse_time(DEPARTURE_TIME, departure)?,
            arrival: parse_time(ARRIVAL_TIME, arrival)?,
        })
    }

    /// Reads a flight from a row of the `flights` table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] if a column is missing or a value
    /// cannot be parsed.
    pub fn from_record(record: &Record) -> Result<Self> {
        Self::parse(
            record.require(FLIGHTS_TABLE, FLIGHT_NUMBER)?,
            record.require(FLIGHTS_TABLE, DESTINATION)?,
            record.require(FLIGHTS_TABLE, DATE)?,
            record.require(FLIGHTS_TABLE, DEPARTURE_TIME)?,
            record.require(FLIGHTS_TABLE, ARRIVAL_TIME)?,
        )
        .map_err(|e| Error::MalformedTable {
            table: FLIGHTS_TABLE.to_string(),
            details: format!("row {}: {e}", record.row()),
        })
    }

    /// The row written to the `flights` table, in [`FLIGHT_HEADERS`] order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.destination.clone(),
            self.date.format(DATE_FORMAT).to_string(),
            self.departure.clone(),
            self.arrival.clone(),
        ]
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} on {}, {}-{}",
            self.number,
            self.destination,
            self.date.format(DATE_FORMAT),
            self.departure,
            self.arrival
        )
    }
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}

fn parse_time(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .map(|time| time.format(TIME_FORMAT).to_string())
        .map_err(|e| invalid(field, format!("'{trimmed}' is not an HH:MM time: {e}")))
}

/// Lists every flight in table order.
///
/// # Errors
///
/// Returns an error if the `flights` table is missing or malformed.
pub fn list_flights<S: TableStore + ?Sized>(store: &S) -> Result<Vec<Flight>> {
    store
        .get_all_rows(FLIGHTS_TABLE)?
        .iter()
        .map(Flight::from_record)
        .collect()
}

/// Lists the distinct destinations in first-seen order.
///
/// # Errors
///
/// Returns an error if the `flights` table is missing or malformed.
pub fn destinations<S: TableStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    let mut seen: Vec<String> = Vec::new();
    for flight in list_flights(store)? {
        if !seen.iter().any(|d| d.eq_ignore_ascii_case(&flight.destination)) {
            seen.push(flight.destination);
        }
    }
    Ok(seen)
}

/// Lists the flights to `destination` (case-insensitive).
///
/// # Errors
///
/// Returns an error if the `flights` table is missing or malformed.
pub fn flights_to<S: TableStore + ?Sized>(store: &S, destination: &str) -> Result<Vec<Flight>> {
    let destination = destination.trim();
    Ok(list_flights(store)?
        .into_iter()
        .filter(|f| f.destination.eq_ignore_ascii_case(destination))
        .collect())
}

/// Finds a flight by number (case-insensitive).
///
/// # Errors
///
/// Returns an error if the `flights` table is missing or malformed.
pub fn find_flight<S: TableStore + ?Sized>(store: &S, number: &str) -> Result<Option<Flight>> {
    let number = number.trim();
    Ok(list_flights(store)?
        .into_iter()
        .find(|f| f.number.eq_ignore_ascii_case(number)))
}
