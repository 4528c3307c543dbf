//! End-to-end tests of booking and post-booking operations.
//!
//! Each test books through the public API, finds the booking again with
//! the locator, and drives it through check-in, detail updates and
//! luggage changes.

mod common;

use common::{create_seeded_database, seeded_generator, today, PassengerFixture};
use magnolia::booking::BookingState;
use magnolia::locator::{locate, Location};
use magnolia::operations::{
    add_luggage, book_passenger, check_in, list_passengers, passenger_details, update_detail_on,
    BookingRequest, CheckInOutcome,
};
use magnolia::store::{TableStore, REGISTRY_TABLE};
use magnolia::validation::{FieldKind, Validator};
use magnolia::Error;

#[test]
fn test_book_marie_curie_end_to_end() {
    let mut db = create_seeded_database();
    let request = BookingRequest::new("MA101", PassengerFixture::new().build());

    let confirmation = book_passenger(&mut db, &mut seeded_generator(1), &request).unwrap();
    let reference = confirmation.reference.to_string();

    let rows = db.get_all_rows("MA101").unwrap();
    assert_eq!(rows.len(), 1);
    let values: Vec<&str> = rows[0].iter().map(|(_, value)| value).collect();
    assert_eq!(
        values,
        vec![
            "Marie",
            "Curie",
            "1867-11-07",
            "AB123CD45",
            "FRANCE",
            "1",
            reference.as_str(),
            "FALSE"
        ]
    );

    let registry = db.get_all_rows(REGISTRY_TABLE).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry[0].get("booking number"), Some(reference.as_str()));
}

#[test]
fn test_locate_after_booking() {
    let mut db = create_seeded_database();
    let request = BookingRequest::new("MA205", PassengerFixture::new().build());
    let confirmation = book_passenger(&mut db, &mut seeded_generator(2), &request).unwrap();
    let reference = confirmation.reference.as_str();

    match locate(&db, reference, "Curie").unwrap() {
        Location::Found(located) => {
            assert_eq!(located.table, "MA205");
            assert_eq!(located.row, confirmation.row);
            assert_eq!(located.given_names, "Marie");
        }
        other => panic!("expected a match, got {other:?}"),
    }

    assert_eq!(locate(&db, reference, "Lovelace").unwrap(), Location::Mismatch);
    assert_eq!(locate(&db, "ZZ99ZZ99", "Curie").unwrap(), Location::NotFound);
}

#[test]
fn test_check_in_locks_the_booking() {
    let mut db = create_seeded_database();
    let request = BookingRequest::new("MA101", PassengerFixture::new().build());
    let confirmation = book_passenger(&mut db, &mut seeded_generator(3), &request).unwrap();
    let located = locate(&db, confirmation.reference.as_str(), "Curie")
        .unwrap()
        .found()
        .unwrap();

    assert_eq!(check_in(&mut db, &located).unwrap(), CheckInOutcome::CheckedIn);
    assert_eq!(
        check_in(&mut db, &located).unwrap(),
        CheckInOutcome::AlreadyCheckedIn
    );

    let before = db.get_all_rows("MA101").unwrap();
    let validator = Validator::new();
    for kind in FieldKind::UPDATABLE {
        let err =
            update_detail_on(&mut db, &validator, &located, kind, "whatever", today()).unwrap_err();
        assert!(matches!(err, Error::StateConflict { .. }), "{kind}: {err}");
    }
    assert!(add_luggage(&mut db, &located, 1).unwrap_err().is_state_conflict());
    assert_eq!(db.get_all_rows("MA101").unwrap(), before);

    let booking = passenger_details(&db, &located).unwrap();
    assert_eq!(booking.state, BookingState::CheckedIn);
}

#[test]
fn test_luggage_one_then_maximum() {
    let mut db = create_seeded_database();
    let request = BookingRequest::new("MA102", PassengerFixture::new().build());
    let confirmation = book_passenger(&mut db, &mut seeded_generator(4), &request).unwrap();
    let located = locate(&db, confirmation.reference.as_str(), "Curie")
        .unwrap()
        .found()
        .unwrap();

    assert_eq!(add_luggage(&mut db, &located, 1).unwrap().value(), 2);
    let err = add_luggage(&mut db, &located, 1).unwrap_err();
    assert!(matches!(err, Error::LuggageAtMaximum { max: 2, .. }));
}

#[test]
fn test_update_detail_before_check_in() {
    let mut db = create_seeded_database();
    let request = BookingRequest::new("MA101", PassengerFixture::new().build());
    let confirmation = book_passenger(&mut db, &mut seeded_generator(5), &request).unwrap();
    let located = locate(&db, confirmation.reference.as_str(), "Curie")
        .unwrap()
        .found()
        .unwrap();

    let validator = Validator::new();
    let rejected = update_detail_on(
        &mut db,
        &validator,
        &located,
        FieldKind::DateOfBirth,
        "2999-01-01",
        today(),
    )
    .unwrap_err();
    assert!(rejected.is_validation());

    let accepted = update_detail_on(
        &mut db,
        &validator,
        &located,
        FieldKind::DateOfBirth,
        "1990-05-12",
        today(),
    )
    .unwrap();
    assert_eq!(accepted.to_string(), "1990-05-12");

    update_detail_on(
        &mut db,
        &validator,
        &located,
        FieldKind::Surname,
        "sklodowska",
        today(),
    )
    .unwrap();

    // the surname changed, so the old one no longer unlocks the booking
    let reference = confirmation.reference.as_str();
    assert_eq!(locate(&db, reference, "Curie").unwrap(), Location::Mismatch);
    let booking = passenger_details(
        &db,
        &locate(&db, reference, "Sklodowska").unwrap().found().unwrap(),
    )
    .unwrap();
    assert_eq!(booking.passenger.date_of_birth, "1990-05-12");
}

#[test]
fn test_list_passengers_after_several_bookings() {
    let mut db = create_seeded_database();
    let mut generator = seeded_generator(6);
    for (given, surname) in [("ada", "lovelace"), ("alan", "turing"), ("grace", "hopper")] {
        let passenger = PassengerFixture::new()
            .with_names(given, surname)
            .with_luggage("0")
            .build();
        book_passenger(&mut db, &mut generator, &BookingRequest::new("MA205", passenger))
            .unwrap();
    }

    let passengers = list_passengers(&db, "MA205").unwrap();
    let names: Vec<String> = passengers
        .iter()
        .map(|booking| booking.passenger.full_name())
        .collect();
    assert_eq!(names, vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]);
    assert!(passengers.iter().all(|b| b.state == BookingState::Booked));
}
