//! Database schema definitions and SQL constants.
//!
//! The workbook is stored as three tables: `metadata` for versioning,
//! `sheets` for the ordered list of tables, and `cells` for every non-empty
//! cell keyed by `(sheet, row_idx, col_idx)`.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the sheets table.
///
/// `position` keeps tables in creation order, the way worksheet tabs are
/// ordered in a spreadsheet.
pub const CREATE_SHEETS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS sheets (
        name TEXT PRIMARY KEY NOT NULL,
        position INTEGER NOT NULL UNIQUE
    )";

/// SQL statement to create the cells table.
pub const CREATE_CELLS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS cells (
        sheet TEXT NOT NULL REFERENCES sheets(name) ON DELETE CASCADE,
        row_idx INTEGER NOT NULL CHECK (row_idx >= 1),
        col_idx INTEGER NOT NULL CHECK (col_idx >= 1),
        value TEXT NOT NULL,
        PRIMARY KEY (sheet, row_idx, col_idx)
    )";

/// Index backing find-by-value lookups.
pub const CREATE_VALUE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_cells_value ON cells(sheet, value)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub const LIST_SHEETS: &str = "SELECT name FROM sheets ORDER BY position";

pub const SHEET_EXISTS: &str = "SELECT COUNT(*) FROM sheets WHERE name = ?";

pub const INSERT_SHEET: &str = r"
    INSERT INTO sheets (name, position)
    VALUES (?, (SELECT COALESCE(MAX(position), 0) + 1 FROM sheets))
";

pub const SELECT_HEADERS: &str = r"
    SELECT col_idx, value
    FROM cells
    WHERE sheet = ? AND row_idx = 1
    ORDER BY col_idx
";

pub const SELECT_DATA_CELLS: &str = r"
    SELECT row_idx, col_idx, value
    FROM cells
    WHERE sheet = ? AND row_idx > 1
    ORDER BY row_idx, col_idx
";

pub const FIND_CELL: &str = r"
    SELECT row_idx, col_idx
    FROM cells
    WHERE sheet = ? AND value = ?
    ORDER BY row_idx, col_idx
    LIMIT 1
";

pub const SELECT_CELL: &str = r"
    SELECT value
    FROM cells
    WHERE sheet = ? AND row_idx = ? AND col_idx = ?
";

pub const UPSERT_CELL: &str = r"
    INSERT OR REPLACE INTO cells (sheet, row_idx, col_idx, value)
    VALUES (?, ?, ?, ?)
";

pub const SELECT_LAST_ROW: &str =
    "SELECT COALESCE(MAX(row_idx), 0) FROM cells WHERE sheet = ?";

pub const SELECT_HEADER_COLUMN: &str = r"
    SELECT col_idx
    FROM cells
    WHERE sheet = ? AND row_idx = 1 AND value = ?
    ORDER BY col_idx
    LIMIT 1
";
