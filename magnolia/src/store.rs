//! The tabular store contract the booking core is written against.
//!
//! A store is a workbook of named tables. Each table is a grid of text
//! cells addressed by 1-based `(row, column)`; row 1 holds the column
//! headers and every later row is one record. The booking core only relies
//! on the operations of [`TableStore`], so any grid-shaped backend (a
//! spreadsheet service, a SQLite file, an in-memory fixture) can sit behind
//! it. [`crate::Database`] is the bundled SQLite implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Name of the table holding flight definitions.
pub const FLIGHTS_TABLE: &str = "flights";

/// Name of the append-only table of every issued booking reference.
pub const REGISTRY_TABLE: &str = "booking numbers";

/// The header row is always row 1; records start on row 2.
pub const HEADER_ROW: usize = 1;

/// Returns `true` for administrative tables that never hold bookings.
///
/// # Examples
///
/// ```
/// use magnolia::store::is_administrative_table;
///
/// assert!(is_administrative_table("flights"));
/// assert!(is_administrative_table("booking numbers"));
/// assert!(!is_administrative_table("MA101"));
/// ```
#[must_use]
pub fn is_administrative_table(table: &str) -> bool {
    table == FLIGHTS_TABLE || table == REGISTRY_TABLE
}

/// Address of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// 1-based row index (row 1 is the header row).
    pub row: usize,
    /// 1-based column index.
    pub column: usize,
}

impl CellRef {
    /// Creates a cell address.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.column)
    }
}

/// One data row, as ordered `(header, value)` pairs.
///
/// Cells that were never written read back as empty strings, so every
/// record has exactly one entry per header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    row: usize,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates a record for the given row.
    #[must_use]
    pub fn new(row: usize, fields: Vec<(String, String)>) -> Self {
        Self { row, fields }
    }

    /// The 1-based row this record was read from.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Looks up a value by header name.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a value by header name, failing if the column is absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTable`] if the table has no such
    /// column.
    pub fn require(&self, table: &str, header: &str) -> Result<&str> {
        self.get(header)
            .ok_or_else(|| crate::Error::MalformedTable {
                table: table.to_string(),
                details: format!("missing column '{header}'"),
            })
    }

    /// Iterates over the `(header, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    /// Number of columns in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Operations the booking core needs from a tabular backend.
///
/// Every call may block on I/O. Implementations report backend failures as
/// [`crate::Error`] values; callers treat those as fatal to the current
/// operation.
pub trait TableStore {
    /// Lists every table in workbook order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Reads every data row of a table, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn get_all_rows(&self, table: &str) -> Result<Vec<Record>>;

    /// Finds the first cell (row-major order) whose value equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn find_cell(&self, table: &str, value: &str) -> Result<Option<CellRef>>;

    /// Reads one cell. Unwritten cells inside the grid read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn read_cell(&self, table: &str, row: usize, column: usize) -> Result<Option<String>>;

    /// Overwrites one cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn write_cell(&mut self, table: &str, row: usize, column: usize, value: &str) -> Result<()>;

    /// Appends a row after the last used row and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn append_row(&mut self, table: &str, values: &[String]) -> Result<usize>;

    /// Finds the 1-based column whose header equals `header`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the table does not exist.
    fn column_index_of(&self, table: &str, header: &str) -> Result<Option<usize>>;

    /// Creates a new table with the given header row.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TableExists`] if the name is taken.
    fn create_table(&mut self, table: &str, headers: &[&str]) -> Result<()>;

    /// Returns `true` if a table with this name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn has_table(&self, table: &str) -> Result<bool> {
        Ok(self.list_tables()?.iter().any(|t| t == table))
    }

    /// Runs `f` so that its writes land together or not at all.
    ///
    /// The default runs `f` directly, which gives sequential writes only.
    /// Backends with transactions override this.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns, or a backend error from commit.
    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        f(self)
    }
}

/// Resolves a header to its column, failing if the table lacks it.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedTable`] when the header is missing.
pub fn require_column<S: TableStore + ?Sized>(
    store: &S,
    table: &str,
    header: &str,
) -> Result<usize> {
    store
        .column_index_of(table, header)?
        .ok_or_else(|| crate::Error::MalformedTable {
            table: table.to_string(),
            details: format!("missing column '{header}'"),
        })
}
