//! Re-reading a located booking before it is mutated.

use crate::booking::{BookingState, BOOKING_NUMBER, CHECKED_IN};
use crate::error::{Error, Result};
use crate::locator::LocatedBooking;
use crate::store::{require_column, TableStore};

/// Confirms the booking still sits at its located row and reads its state.
///
/// The store may change between lookup and mutation, so every post-booking
/// operation starts here.
pub(super) fn current_state<S: TableStore + ?Sized>(
    store: &S,
    located: &LocatedBooking,
) -> Result<BookingState> {
    let reference_column = require_column(store, &located.table, BOOKING_NUMBER)?;
    let stored = store
        .read_cell(&located.table, located.row, reference_column)?
        .unwrap_or_default();
    if stored != located.reference {
        return Err(Error::NotFound {
            resource: format!(
                "booking {} at '{}' row {}",
                located.reference, located.table, located.row
            ),
        });
    }

    let checked_in_column = require_column(store, &located.table, CHECKED_IN)?;
    let cell = store
        .read_cell(&located.table, located.row, checked_in_column)?
        .unwrap_or_default();
    BookingState::from_cell(&cell).ok_or_else(|| Error::MalformedTable {
        table: located.table.clone(),
        details: format!("row {}: '{cell}' is not TRUE or FALSE", located.row),
    })
}

/// Fails with [`Error::StateConflict`] once the booking is checked in.
pub(super) fn ensure_unlocked<S: TableStore + ?Sized>(
    store: &S,
    located: &LocatedBooking,
) -> Result<()> {
    if current_state(store, located)?.is_locked() {
        return Err(Error::StateConflict {
            reference: located.reference.clone(),
        });
    }
    Ok(())
}
