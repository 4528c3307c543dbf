//! Adding checked bags to a booking.
//!
//! Luggage only goes up, and never past [`Luggage::MAX`].

use crate::error::{Error, Result};
use crate::locator::LocatedBooking;
use crate::luggage::Luggage;
use crate::store::{require_column, TableStore};
use crate::validation::FieldKind;

use super::guard::ensure_unlocked;

/// Adds `additional` bags to a booked passenger and returns the new count.
///
/// # Errors
///
/// Returns [`Error::StateConflict`] if the booking is checked in,
/// [`Error::LuggageAtMaximum`] if no more bags are allowed,
/// [`Error::Validation`] if `additional` is zero or would exceed the
/// maximum, [`Error::MalformedTable`] if the stored count is unreadable, or
/// a storage error. The row is unchanged on every error.
///
/// # Examples
///
/// ```no_run
/// use magnolia::locator::locate;
/// use magnolia::operations::add_luggage;
/// use magnolia::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/magnolia.db")).unwrap();
/// let located = locate(&db, "TF78RE32", "Curie").unwrap().found().unwrap();
/// let luggage = add_luggage(&mut db, &located, 1).unwrap();
/// println!("now {luggage} bag(s)");
/// ```
pub fn add_luggage<S: TableStore + ?Sized>(
    store: &mut S,
    located: &LocatedBooking,
    additional: u8,
) -> Result<Luggage> {
    ensure_unlocked(store, located)?;

    let current = current_luggage(store, located)?;
    if current.is_at_maximum() {
        return Err(Error::LuggageAtMaximum {
            reference: located.reference.clone(),
            max: Luggage::MAX,
        });
    }
    if additional == 0 {
        return Err(Error::Validation {
            field: FieldKind::Luggage.to_string(),
            message: "add at least one bag".into(),
        });
    }

    let updated = current.checked_add(additional)?;
    let column = require_column(store, &located.table, FieldKind::Luggage.header())?;
    store.write_cell(&located.table, located.row, column, &updated.to_string())?;
    log::info!(
        "luggage for booking {} raised from {current} to {updated}",
        located.reference
    );
    Ok(updated)
}

/// Reads the stored luggage count. An empty cell counts as no bags.
///
/// # Errors
///
/// Returns [`Error::MalformedTable`] if the cell holds something other than
/// a count in range.
pub fn current_luggage<S: TableStore + ?Sized>(
    store: &S,
    located: &LocatedBooking,
) -> Result<Luggage> {
    let column = require_column(store, &located.table, FieldKind::Luggage.header())?;
    let cell = store
        .read_cell(&located.table, located.row, column)?
        .unwrap_or_default();
    if cell.trim().is_empty() {
        return Ok(Luggage::default());
    }
    cell.parse::<Luggage>().map_err(|e| Error::MalformedTable {
        table: located.table.clone(),
        details: format!("row {}: {e}", located.row),
    })
}
