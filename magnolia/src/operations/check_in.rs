//! Checking a passenger in.
//!
//! Check-in is the one-way transition from booked to checked in. Once it
//! has happened the booking is locked against every other change.

use serde::Serialize;

use crate::booking::{BookingState, CHECKED_IN};
use crate::error::Result;
use crate::locator::LocatedBooking;
use crate::store::{require_column, TableStore};

use super::guard::current_state;

/// What a check-in attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInOutcome {
    /// The booking moved from booked to checked in.
    CheckedIn,
    /// The booking was already checked in; nothing was written.
    AlreadyCheckedIn,
}

/// Checks in a located booking.
///
/// Checking in twice is not an error; the second call reports
/// [`CheckInOutcome::AlreadyCheckedIn`] and leaves the row untouched.
///
/// # Errors
///
/// Returns [`crate::Error::NotFound`] if the booking is no longer at its
/// located row, [`crate::Error::MalformedTable`] if its checked-in cell is
/// unreadable, or a storage error from the write.
pub fn check_in<S: TableStore + ?Sized>(
    store: &mut S,
    located: &LocatedBooking,
) -> Result<CheckInOutcome> {
    if current_state(store, located)? == BookingState::CheckedIn {
        log::debug!("booking {} is already checked in", located.reference);
        return Ok(CheckInOutcome::AlreadyCheckedIn);
    }

    let column = require_column(store, &located.table, CHECKED_IN)?;
    store.write_cell(
        &located.table,
        located.row,
        column,
        BookingState::CheckedIn.as_cell(),
    )?;
    log::info!(
        "checked in booking {} ({} {})",
        located.reference,
        located.given_names,
        located.surname
    );
    Ok(CheckInOutcome::CheckedIn)
}
