//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the magnolia library.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use magnolia::database::{Database, DatabaseConfig};
use magnolia::operations::seed_workbook;
use magnolia::validation::Validator;
use magnolia::{Flight, Passenger, ReferenceGenerator};

/// A fixed "today" so date-of-birth checks are deterministic.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// The flights every seeded workbook starts with.
#[allow(dead_code)]
pub fn sample_flights() -> Vec<Flight> {
    vec![
        Flight::parse("MA101", "Paris", "2025-07-01", "08:15", "10:30").unwrap(),
        Flight::parse("MA102", "Paris", "2025-07-02", "18:00", "20:15").unwrap(),
        Flight::parse("MA205", "Rome", "2025-07-03", "09:00", "11:20").unwrap(),
    ]
}

/// Creates a temporary workbook that will be cleaned up with the process.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a temporary workbook seeded with [`sample_flights`].
#[allow(dead_code)]
pub fn create_seeded_database() -> Database {
    let mut db = create_test_database();
    seed_workbook(&mut db, &sample_flights()).unwrap();
    db
}

/// A reference generator with a fixed seed.
#[allow(dead_code)]
pub fn seeded_generator(seed: u64) -> ReferenceGenerator<StdRng> {
    ReferenceGenerator::new(StdRng::seed_from_u64(seed))
}

/// Builder for validated passengers with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::PassengerFixture;
/// let passenger = PassengerFixture::new()
///     .with_names("ada", "lovelace")
///     .with_luggage("0")
///     .build();
/// ```
#[allow(dead_code)]
pub struct PassengerFixture {
    given_names: String,
    surname: String,
    date_of_birth: String,
    passport: String,
    nationality: String,
    luggage: String,
}

#[allow(dead_code)]
impl PassengerFixture {
    /// Creates a fixture for Marie Curie with one bag.
    pub fn new() -> Self {
        Self {
            given_names: "marie".into(),
            surname: "curie".into(),
            date_of_birth: "1867-11-07".into(),
            passport: "ab123cd45".into(),
            nationality: "france".into(),
            luggage: "1".into(),
        }
    }

    /// Sets the raw given names and surname.
    pub fn with_names(mut self, given: &str, surname: &str) -> Self {
        self.given_names = given.into();
        self.surname = surname.into();
        self
    }

    /// Sets the raw luggage count.
    pub fn with_luggage(mut self, luggage: &str) -> Self {
        self.luggage = luggage.into();
        self
    }

    /// Validates the raw values into a passenger.
    pub fn build(self) -> Passenger {
        Passenger::from_raw(
            &Validator::new(),
            [
                self.given_names.as_str(),
                self.surname.as_str(),
                self.date_of_birth.as_str(),
                self.passport.as_str(),
                self.nationality.as_str(),
                self.luggage.as_str(),
            ],
            today(),
        )
        .unwrap()
    }
}

impl Default for PassengerFixture {
    fn default() -> Self {
        Self::new()
    }
}
