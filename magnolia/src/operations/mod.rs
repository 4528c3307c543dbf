//! Booking and post-booking operations.
//!
//! Every operation takes the store explicitly and returns a `Result`; none
//! of them prompt. The interactive loops that collect input live in the
//! CLI and call in here once they hold validated values.
//!
//! # Flow
//!
//! 1. **Booking**: [`book_passenger`] draws a fresh reference and writes
//!    the registry entry and the passenger row together
//! 2. **Post-booking**: a [`crate::locator::LocatedBooking`] from
//!    [`crate::locator::locate`] is handed to [`check_in`],
//!    [`update_detail`] or [`add_luggage`], each of which re-reads the row
//!    and refuses to touch a checked-in booking
//!
//! # Examples
//!
//! ```no_run
//! use magnolia::locator::locate;
//! use magnolia::operations::{check_in, CheckInOutcome};
//! use magnolia::{Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/magnolia.db")).unwrap();
//! if let Some(located) = locate(&db, "TF78RE32", "Curie").unwrap().found() {
//!     match check_in(&mut db, &located).unwrap() {
//!         CheckInOutcome::CheckedIn => println!("checked in"),
//!         CheckInOutcome::AlreadyCheckedIn => println!("already checked in"),
//!     }
//! }
//! ```

pub mod book;
pub mod check_in;
mod guard;
pub mod init;
pub mod luggage;
pub mod update;
pub mod view;

#[cfg(test)]
mod proptests;

pub use book::{book_passenger, used_references, BookingConfirmation, BookingRequest};
pub use check_in::{check_in, CheckInOutcome};
pub use init::{init_database, seed_workbook, InitOptions, InitResult, SeedResult};
pub use luggage::{add_luggage, current_luggage};
pub use update::{update_detail, update_detail_on};
pub use view::{list_passengers, passenger_details};
