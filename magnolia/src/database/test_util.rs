//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// The flights every seeded test workbook starts with.
///
/// # Panics
///
/// Panics if a fixture flight fails to parse.
#[must_use]
pub fn sample_flights() -> Vec<crate::Flight> {
    [
        ("MA101", "Paris", "2025-07-01", "08:15", "10:30"),
        ("MA102", "Paris", "2025-07-02", "18:00", "20:15"),
        ("MA205", "Rome", "2025-07-03", "09:00", "11:20"),
    ]
    .into_iter()
    .map(|(n, d, date, dep, arr)| crate::Flight::parse(n, d, date, dep, arr).unwrap())
    .collect()
}

/// Creates a temporary workbook with the sample flights, an empty booking
/// registry and an empty passenger table per flight.
///
/// # Panics
///
/// Panics if the workbook cannot be created or seeded.
#[must_use]
pub fn create_seeded_database() -> Database {
    let mut db = create_test_database();
    crate::operations::seed_workbook(&mut db, &sample_flights()).unwrap();
    db
}

/// Appends a booking row for Marie Curie to `table` and returns where it
/// landed, as the locator would report it.
///
/// # Panics
///
/// Panics if the row cannot be written.
pub fn add_curie_booking(
    db: &mut Database,
    table: &str,
    reference: &str,
    checked_in: bool,
) -> crate::locator::LocatedBooking {
    use crate::store::TableStore;

    let values: Vec<String> = [
        "Marie",
        "Curie",
        "1867-11-07",
        "AB123CD45",
        "FRANCE",
        "1",
        reference,
        if checked_in { "TRUE" } else { "FALSE" },
    ]
    .iter()
    .map(|v| (*v).to_string())
    .collect();
    let row = db.append_row(table, &values).unwrap();
    db.append_row(crate::store::REGISTRY_TABLE, &[reference.to_string()])
        .unwrap();

    crate::locator::LocatedBooking {
        table: table.to_string(),
        row,
        reference: reference.to_string(),
        given_names: "Marie".to_string(),
        surname: "Curie".to_string(),
    }
}
