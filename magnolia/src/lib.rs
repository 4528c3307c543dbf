#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # magnolia
//!
//! A library for an airline booking desk kept in a spreadsheet-like
//! workbook.
//!
//! Flights, passenger bookings and the registry of issued booking
//! references all live in named tables. This library validates passenger
//! details, issues collision-free booking references, finds a booking from
//! its reference and the passenger's surname, and performs check-in and
//! post-booking changes under the rule that a checked-in booking is locked.
//!
//! ## Core Types
//!
//! - [`TableStore`]: the tabular backend contract, with [`Database`] as the
//!   bundled SQLite workbook
//! - [`Passenger`], [`PassengerBooking`] and [`BookingState`]: bookings
//! - [`BookingReference`] and [`ReferenceGenerator`]: booking references
//! - [`Luggage`]: the bounded checked-bag count
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use magnolia::validation::{validate, FieldKind};
//! use magnolia::{BookingReference, Luggage};
//!
//! let surname = validate(FieldKind::Surname, "curie").unwrap();
//! assert_eq!(surname.to_string(), "Curie");
//!
//! let bags = Luggage::try_from(1).unwrap();
//! assert_eq!(bags.checked_add(1).unwrap().value(), 2);
//!
//! assert!("TF78RE32".parse::<BookingReference>().is_ok());
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod flight;
pub mod locator;
pub mod logging;
pub mod luggage;
pub mod operations;
pub mod reference;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use booking::{BookingState, Passenger, PassengerBooking};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use flight::Flight;
pub use locator::{locate, LocatedBooking, Location};
pub use logging::{init_logger, LogLevel, Logger};
pub use luggage::Luggage;
pub use operations::{
    add_luggage, book_passenger, check_in, list_passengers, passenger_details, update_detail,
    BookingConfirmation, BookingRequest, CheckInOutcome,
};
pub use reference::{BookingReference, ReferenceGenerator};
pub use store::TableStore;
pub use validation::{FieldKind, Validator};
