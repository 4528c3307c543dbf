//! Creating the workbook schema and checking its version on open.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CELLS_TABLE, CREATE_METADATA_TABLE, CREATE_SHEETS_TABLE, CREATE_VALUE_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// What a freshly opened file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// No workbook schema yet.
    Empty,
    /// A workbook this build understands.
    Current,
    /// A workbook written by another schema version.
    Unsupported(i32),
}

/// Creates the workbook tables and records the schema version.
///
/// # Errors
///
/// Returns an error if any statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use magnolia::database::{create_schema, schema_version};
///
/// let conn = Connection::open_in_memory().unwrap();
/// create_schema(&conn).unwrap();
/// assert_eq!(schema_version(&conn).unwrap(), 1);
/// ```
pub fn create_schema(conn: &Connection) -> Result<()> {
    for statement in [
        CREATE_METADATA_TABLE,
        CREATE_SHEETS_TABLE,
        CREATE_CELLS_TABLE,
        CREATE_VALUE_INDEX,
    ] {
        conn.execute(statement, [])?;
    }
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Reads the recorded schema version; 0 when there is none.
///
/// # Errors
///
/// Returns an error if the query fails for any reason other than a missing
/// `metadata` table or version row.
pub fn schema_version(conn: &Connection) -> Result<i32> {
    let result = conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    });

    match result {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        // "no such table: metadata" on a brand new file
        Err(rusqlite::Error::SqliteFailure(ref failure, _))
            if failure.code == rusqlite::ErrorCode::Unknown =>
        {
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Classifies the schema found in `conn`.
///
/// # Errors
///
/// Returns an error if the version cannot be read.
pub fn schema_status(conn: &Connection) -> Result<SchemaStatus> {
    Ok(match schema_version(conn)? {
        0 => SchemaStatus::Empty,
        CURRENT_SCHEMA_VERSION => SchemaStatus::Current,
        other => SchemaStatus::Unsupported(other),
    })
}

/// Makes sure `conn` holds a usable workbook, creating the schema in an
/// empty file when `writable`.
///
/// # Errors
///
/// Returns [`Error::DatabaseCorruption`] for an empty read-only file or an
/// unsupported version, or a storage error.
pub fn prepare_schema(conn: &Connection, writable: bool) -> Result<()> {
    match schema_status(conn)? {
        SchemaStatus::Current => Ok(()),
        SchemaStatus::Empty if writable => create_schema(conn),
        SchemaStatus::Empty => Err(Error::DatabaseCorruption {
            details: "not an initialized workbook".into(),
        }),
        SchemaStatus::Unsupported(version) => Err(Error::DatabaseCorruption {
            details: format!(
                "workbook schema version {version} is not supported (expected {CURRENT_SCHEMA_VERSION})"
            ),
        }),
    }
}
