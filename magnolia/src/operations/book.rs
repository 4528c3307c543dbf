//! Booking a passenger onto a flight.
//!
//! The caller collects and validates every passenger field first. Only then
//! is a reference drawn, and the registry entry and the passenger row are
//! written together inside [`TableStore::atomically`], registry first.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::booking::{passenger_row, Passenger, BOOKING_NUMBER};
use crate::error::{Error, Result};
use crate::flight::{find_flight, Flight};
use crate::reference::{BookingReference, ReferenceGenerator};
use crate::store::{require_column, TableStore, REGISTRY_TABLE};

/// A validated request to book one passenger.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Flight number, matched case-insensitively.
    pub flight_number: String,
    /// The passenger's validated details.
    pub passenger: Passenger,
}

impl BookingRequest {
    /// Creates a booking request.
    #[must_use]
    pub fn new(flight_number: impl Into<String>, passenger: Passenger) -> Self {
        Self {
            flight_number: flight_number.into(),
            passenger,
        }
    }
}

/// What a successful booking produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    /// The flight booked.
    pub flight: Flight,
    /// The freshly issued reference.
    pub reference: BookingReference,
    /// Row of the new booking in the flight's table.
    pub row: usize,
    /// The passenger as written.
    pub passenger: Passenger,
}

/// Reads every reference recorded in the registry.
///
/// # Errors
///
/// Returns an error if the registry table is missing or unreadable.
pub fn used_references<S: TableStore + ?Sized>(store: &S) -> Result<HashSet<String>> {
    Ok(store
        .get_all_rows(REGISTRY_TABLE)?
        .iter()
        .filter_map(|record| record.get(BOOKING_NUMBER))
        .filter(|reference| !reference.is_empty())
        .map(str::to_string)
        .collect())
}

/// Books a passenger and returns the confirmation.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the flight or its passenger table does not
/// exist, [`Error::MalformedTable`] if the passenger table lacks a column,
/// or a storage error from either write. Nothing is written on error.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use magnolia::operations::{book_passenger, BookingRequest};
/// use magnolia::validation::Validator;
/// use magnolia::{Database, DatabaseConfig, Passenger, ReferenceGenerator};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/magnolia.db")).unwrap();
/// let passenger = Passenger::from_raw(
///     &Validator::new(),
///     ["marie", "curie", "1867-11-07", "ab123cd45", "france", "1"],
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
/// )
/// .unwrap();
///
/// let mut generator = ReferenceGenerator::from_thread_rng();
/// let confirmation =
///     book_passenger(&mut db, &mut generator, &BookingRequest::new("MA101", passenger)).unwrap();
/// println!("booking number {}", confirmation.reference);
/// ```
pub fn book_passenger<S, R>(
    store: &mut S,
    generator: &mut ReferenceGenerator<R>,
    request: &BookingRequest,
) -> Result<BookingConfirmation>
where
    S: TableStore,
    R: Rng,
{
    let flight = find_flight(store, &request.flight_number)?.ok_or_else(|| Error::NotFound {
        resource: format!("flight '{}'", request.flight_number.trim()),
    })?;
    if !store.has_table(&flight.number)? {
        return Err(Error::NotFound {
            resource: format!("passenger table for flight '{}'", flight.number),
        });
    }
    let registry_column = require_column(store, REGISTRY_TABLE, BOOKING_NUMBER)?;
    // shape check before anything is drawn or written
    passenger_row(store, &flight.number, &request.passenger, "")?;

    let (reference, row) = store.atomically(|store| {
        let used = used_references(store)?;
        let reference = generator.generate(&used);

        let mut entry = vec![String::new(); registry_column];
        entry[registry_column - 1] = reference.to_string();
        store.append_row(REGISTRY_TABLE, &entry)?;

        let values = passenger_row(store, &flight.number, &request.passenger, reference.as_str())?;
        let row = store.append_row(&flight.number, &values)?;
        Ok((reference, row))
    })?;

    log::info!(
        "booked {} on {} with reference {reference} (row {row})",
        request.passenger.full_name(),
        flight.number
    );

    Ok(BookingConfirmation {
        flight,
        reference,
        row,
        passenger: request.passenger.clone(),
    })
}
