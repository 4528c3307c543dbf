//! Read-only views of bookings.

use crate::booking::{PassengerBooking, BOOKING_NUMBER};
use crate::error::{Error, Result};
use crate::flight::find_flight;
use crate::locator::LocatedBooking;
use crate::store::TableStore;

/// Reads the full booking at a located row.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the row no longer holds the booking, or
/// [`Error::MalformedTable`] if a cell cannot be parsed.
pub fn passenger_details<S: TableStore + ?Sized>(
    store: &S,
    located: &LocatedBooking,
) -> Result<PassengerBooking> {
    let rows = store.get_all_rows(&located.table)?;
    let record = rows
        .iter()
        .find(|record| {
            record.row() == located.row
                && record.get(BOOKING_NUMBER) == Some(located.reference.as_str())
        })
        .ok_or_else(|| Error::NotFound {
            resource: format!("booking {}", located.reference),
        })?;
    PassengerBooking::from_record(&located.table, record)
}

/// Lists every booking on a flight, in row order.
///
/// Blank rows are skipped.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown flight, or
/// [`Error::MalformedTable`] if a row cannot be parsed.
pub fn list_passengers<S: TableStore + ?Sized>(
    store: &S,
    flight_number: &str,
) -> Result<Vec<PassengerBooking>> {
    let flight = find_flight(store, flight_number)?.ok_or_else(|| Error::NotFound {
        resource: format!("flight '{}'", flight_number.trim()),
    })?;

    store
        .get_all_rows(&flight.number)?
        .iter()
        .filter(|record| record.iter().any(|(_, value)| !value.trim().is_empty()))
        .map(|record| PassengerBooking::from_record(&flight.number, record))
        .collect()
}
