//! Correcting a passenger's personal details.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::locator::LocatedBooking;
use crate::store::{require_column, TableStore};
use crate::validation::{FieldKind, FieldValue, Validator};

use super::guard::ensure_unlocked;

/// Replaces one detail field of a booked passenger.
///
/// The raw input is validated against today's date with `validator`.
///
/// # Errors
///
/// See [`update_detail_on`].
pub fn update_detail<S: TableStore + ?Sized>(
    store: &mut S,
    validator: &Validator,
    located: &LocatedBooking,
    kind: FieldKind,
    raw: &str,
) -> Result<FieldValue> {
    update_detail_on(store, validator, located, kind, raw, Local::now().date_naive())
}

/// Replaces one detail field, treating `today` as the current date.
///
/// The lock is checked before the input is validated, so a checked-in
/// booking reports [`Error::StateConflict`] whatever the input.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `kind` is not an updatable detail or the
/// input is rejected, [`Error::StateConflict`] if the booking is checked
/// in, [`Error::NotFound`] if the booking has moved, or a storage error.
pub fn update_detail_on<S: TableStore + ?Sized>(
    store: &mut S,
    validator: &Validator,
    located: &LocatedBooking,
    kind: FieldKind,
    raw: &str,
    today: NaiveDate,
) -> Result<FieldValue> {
    if !kind.is_updatable() {
        return Err(Error::Validation {
            field: kind.to_string(),
            message: "not changeable through a detail update".into(),
        });
    }

    ensure_unlocked(store, located)?;
    let value = validator.validate_on(kind, raw, today)?;

    let column = require_column(store, &located.table, kind.header())?;
    store.write_cell(&located.table, located.row, column, &value.to_cell())?;
    log::info!("updated {kind} of booking {} to '{value}'", located.reference);
    Ok(value)
}
