//! SQLite-backed workbook implementing the tabular store contract.
//!
//! The workbook keeps every table as a grid of text cells in a single
//! SQLite file, so it behaves like a small spreadsheet: tables are listed
//! in creation order, row 1 of each table holds the headers, and rows are
//! appended after the last used row.
//!
//! # Examples
//!
//! ```no_run
//! use magnolia::database::{Database, DatabaseConfig};
//! use magnolia::store::TableStore;
//!
//! let config = DatabaseConfig::new("/tmp/magnolia.db");
//! let mut db = Database::open(config).unwrap();
//!
//! db.create_table("MA101", &["first name", "last name"]).unwrap();
//! db.append_row("MA101", &["Marie".into(), "Curie".into()]).unwrap();
//!
//! for record in db.get_all_rows("MA101").unwrap() {
//!     println!("{:?}", record);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME, DEFAULT_BUSY_TIMEOUT};
pub use connection::Database;

pub use migrations::{create_schema, prepare_schema, schema_status, schema_version, SchemaStatus};
