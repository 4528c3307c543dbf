//! Property-based tests for the booking operations.
//!
//! Each case builds a fresh workbook, so case counts stay small.

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::database::test_util::create_seeded_database;
use crate::locator::{locate, Location};
use crate::operations::{add_luggage, book_passenger, check_in, BookingRequest};
use crate::validation::Validator;
use crate::{Error, Passenger, ReferenceGenerator};

fn passenger(given: &str, surname: &str, luggage: u8) -> Passenger {
    let luggage = luggage.to_string();
    Passenger::from_raw(
        &Validator::new(),
        [given, surname, "1990-05-12", "X1234567", "norway", &luggage],
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    )
    .unwrap()
}

fn flight_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["MA101", "MA102", "MA205"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    // Every booking gets a distinct reference and can be found again
    #[test]
    fn bookings_are_unique_and_locatable(
        seed in any::<u64>(),
        bookings in prop::collection::vec(
            (flight_strategy(), "[a-z]{1,8}", "[a-z]{1,10}"),
            1..8,
        )
    ) {
        let mut db = create_seeded_database();
        let mut generator = ReferenceGenerator::new(StdRng::seed_from_u64(seed));
        let mut references = HashSet::new();

        for (flight, given, surname) in &bookings {
            let request = BookingRequest::new(*flight, passenger(given, surname, 0));
            let confirmation = book_passenger(&mut db, &mut generator, &request).unwrap();
            prop_assert!(references.insert(confirmation.reference.to_string()));

            let surname = request.passenger.surname.clone();
            match locate(&db, confirmation.reference.as_str(), &surname).unwrap() {
                Location::Found(located) => {
                    prop_assert_eq!(located.table, (*flight).to_string());
                    prop_assert_eq!(located.row, confirmation.row);
                }
                other => prop_assert!(false, "expected a match, got {:?}", other),
            }
        }
    }

    // Luggage never ends above the maximum, whatever is asked for
    #[test]
    fn luggage_stays_in_range(start in 0u8..=2, requests in prop::collection::vec(0u8..=3, 1..6)) {
        let mut db = create_seeded_database();
        let mut generator = ReferenceGenerator::new(StdRng::seed_from_u64(1));
        let request = BookingRequest::new("MA101", passenger("ann", "lee", start));
        let confirmation = book_passenger(&mut db, &mut generator, &request).unwrap();
        let located = locate(&db, confirmation.reference.as_str(), "Lee").unwrap().found().unwrap();

        let mut expected = start;
        for additional in requests {
            match add_luggage(&mut db, &located, additional) {
                Ok(luggage) => {
                    expected += additional;
                    prop_assert_eq!(luggage.value(), expected);
                }
                Err(Error::LuggageAtMaximum { .. }) => prop_assert_eq!(expected, 2),
                Err(err) => prop_assert!(err.is_validation()),
            }
            prop_assert!(expected <= 2);
        }
    }

    // Nothing changes luggage once the passenger is checked in
    #[test]
    fn checked_in_luggage_is_frozen(start in 0u8..=1, additional in 1u8..=2) {
        let mut db = create_seeded_database();
        let mut generator = ReferenceGenerator::new(StdRng::seed_from_u64(2));
        let request = BookingRequest::new("MA205", passenger("bo", "ek", start));
        let confirmation = book_passenger(&mut db, &mut generator, &request).unwrap();
        let located = locate(&db, confirmation.reference.as_str(), "Ek").unwrap().found().unwrap();

        check_in(&mut db, &located).unwrap();
        let err = add_luggage(&mut db, &located, additional).unwrap_err();
        prop_assert!(err.is_state_conflict());
    }
}
