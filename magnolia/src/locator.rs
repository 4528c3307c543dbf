//! Finding a booking from its reference.
//!
//! Bookings are spread over one table per flight, so a lookup walks every
//! per-flight table looking for the reference in its `booking number`
//! column, then confirms the caller knows the passenger's surname.

use serde::Serialize;

use crate::booking::BOOKING_NUMBER;
use crate::error::Result;
use crate::store::{is_administrative_table, require_column, TableStore, HEADER_ROW};
use crate::validation::FieldKind;

/// Where a booking lives, and who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedBooking {
    /// The per-flight table holding the booking.
    pub table: String,
    /// The booking's 1-based row in that table.
    pub row: usize,
    /// The booking reference.
    pub reference: String,
    /// Given name(s) as stored.
    pub given_names: String,
    /// Surname as stored.
    pub surname: String,
}

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The reference exists and the surname matched.
    Found(LocatedBooking),
    /// No per-flight table holds the reference.
    NotFound,
    /// The reference exists but belongs to someone with another surname.
    Mismatch,
}

impl Location {
    /// Returns the located booking, if any.
    #[must_use]
    pub fn found(self) -> Option<LocatedBooking> {
        match self {
            Self::Found(located) => Some(located),
            Self::NotFound | Self::Mismatch => None,
        }
    }
}

/// Finds the booking with `reference` and checks its surname.
///
/// The surname comparison is exact; callers holding raw operator input
/// should format it with the surname validator first.
///
/// # Errors
///
/// Returns an error only if the store fails or a table holding the
/// reference lacks a passenger column.
///
/// # Examples
///
/// ```no_run
/// use magnolia::database::{Database, DatabaseConfig};
/// use magnolia::locator::{locate, Location};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/magnolia.db")).unwrap();
/// match locate(&db, "TF78RE32", "Curie").unwrap() {
///     Location::Found(booking) => println!("{} row {}", booking.table, booking.row),
///     Location::Mismatch => println!("surname does not match"),
///     Location::NotFound => println!("no such booking"),
/// }
/// ```
pub fn locate<S: TableStore + ?Sized>(
    store: &S,
    reference: &str,
    surname: &str,
) -> Result<Location> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Ok(Location::NotFound);
    }

    for table in store.list_tables()? {
        if is_administrative_table(&table) {
            continue;
        }
        let Some(row) = find_reference_row(store, &table, reference)? else {
            continue;
        };

        let stored_surname = read_field(store, &table, row, FieldKind::Surname)?;
        if stored_surname != surname {
            log::debug!("booking {reference} found in '{table}' but surname did not match");
            return Ok(Location::Mismatch);
        }

        let given_names = read_field(store, &table, row, FieldKind::GivenNames)?;
        log::debug!("located booking {reference} at '{table}' row {row}");
        return Ok(Location::Found(LocatedBooking {
            table,
            row,
            reference: reference.to_string(),
            given_names,
            surname: stored_surname,
        }));
    }

    Ok(Location::NotFound)
}

/// Returns the row in `table` whose booking-number cell equals `reference`.
fn find_reference_row<S: TableStore + ?Sized>(
    store: &S,
    table: &str,
    reference: &str,
) -> Result<Option<usize>> {
    let Some(hit) = store.find_cell(table, reference)? else {
        return Ok(None);
    };
    let Some(column) = store.column_index_of(table, BOOKING_NUMBER)? else {
        log::debug!("table '{table}' has no '{BOOKING_NUMBER}' column; skipping");
        return Ok(None);
    };

    if hit.column == column && hit.row > HEADER_ROW {
        return Ok(Some(hit.row));
    }

    // the first match sat in another column, so scan the reference column
    Ok(store
        .get_all_rows(table)?
        .into_iter()
        .find(|record| record.get(BOOKING_NUMBER) == Some(reference))
        .map(|record| record.row()))
}

fn read_field<S: TableStore + ?Sized>(
    store: &S,
    table: &str,
    row: usize,
    kind: FieldKind,
) -> Result<String> {
    let column = require_column(store, table, kind.header())?;
    Ok(store.read_cell(table, row, column)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_seeded_database, create_test_database};

    fn add_booking(store: &mut impl TableStore, table: &str, given: &str, surname: &str, reference: &str) {
        let row = vec![
            given.to_string(),
            surname.to_string(),
            "1990-05-12".to_string(),
            "AB123".to_string(),
            "FRANCE".to_string(),
            "0".to_string(),
            reference.to_string(),
            "FALSE".to_string(),
        ];
        store.append_row(table, &row).unwrap();
    }

    #[test]
    fn test_locate_found() {
        let mut db = create_seeded_database();
        add_booking(&mut db, "MA101", "Ann", "Lee", "AB12CD34");
        add_booking(&mut db, "MA205", "Marie", "Curie", "TF78RE32");

        let located = locate(&db, "TF78RE32", "Curie").unwrap().found().unwrap();
        assert_eq!(located.table, "MA205");
        assert_eq!(located.row, 2);
        assert_eq!(located.given_names, "Marie");
        assert_eq!(located.surname, "Curie");
        assert_eq!(located.reference, "TF78RE32");
    }

    #[test]
    fn test_locate_mismatch_is_case_sensitive() {
        let mut db = create_seeded_database();
        add_booking(&mut db, "MA101", "Marie", "Curie", "TF78RE32");

        assert_eq!(locate(&db, "TF78RE32", "curie").unwrap(), Location::Mismatch);
        assert_eq!(locate(&db, "TF78RE32", "Lovelace").unwrap(), Location::Mismatch);
    }

    #[test]
    fn test_locate_not_found() {
        let mut db = create_seeded_database();
        add_booking(&mut db, "MA101", "Marie", "Curie", "TF78RE32");

        assert_eq!(locate(&db, "ZZ11ZZ11", "Curie").unwrap(), Location::NotFound);
        assert_eq!(locate(&db, "", "Curie").unwrap(), Location::NotFound);
    }

    #[test]
    fn test_locate_ignores_registry() {
        let mut db = create_seeded_database();
        db.append_row(crate::store::REGISTRY_TABLE, &["TF78RE32".to_string()])
            .unwrap();

        assert_eq!(locate(&db, "TF78RE32", "Curie").unwrap(), Location::NotFound);
    }

    #[test]
    fn test_locate_skips_value_in_other_column() {
        let mut db = create_seeded_database();
        // a passport that happens to equal the reference, seen first
        let decoy = vec![
            "Bo".to_string(),
            "Lee".to_string(),
            "1990-05-12".to_string(),
            "TF78RE32".to_string(),
            "FRANCE".to_string(),
            "0".to_string(),
            "AB12CD34".to_string(),
            "FALSE".to_string(),
        ];
        db.append_row("MA101", &decoy).unwrap();
        add_booking(&mut db, "MA101", "Marie", "Curie", "TF78RE32");

        let located = locate(&db, "TF78RE32", "Curie").unwrap().found().unwrap();
        assert_eq!(located.row, 3);
    }

    #[test]
    fn test_locate_with_reordered_columns() {
        let mut db = create_test_database();
        db.create_table(
            "MA300",
            &["booking number", "last name", "first name", "checked in"],
        )
        .unwrap();
        db.append_row(
            "MA300",
            &[
                "TF78RE32".to_string(),
                "Curie".to_string(),
                "Marie".to_string(),
                "FALSE".to_string(),
            ],
        )
        .unwrap();

        let located = locate(&db, "TF78RE32", "Curie").unwrap().found().unwrap();
        assert_eq!(located.table, "MA300");
        assert_eq!(located.given_names, "Marie");
    }
}
