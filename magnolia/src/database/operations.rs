//! Cell-level operations backing [`TableStore`] for [`Database`].
//!
//! Cells that were never written are simply absent from the `cells` table,
//! so an unwritten cell and an empty one read back the same way.

use std::collections::BTreeMap;

use rusqlite::{params, OptionalExtension};

use crate::error::{Error, Result};
use crate::store::{CellRef, Record, TableStore, HEADER_ROW};

use super::connection::{translate_error, Database};
use super::schema::{
    FIND_CELL, INSERT_SHEET, LIST_SHEETS, SELECT_CELL, SELECT_DATA_CELLS, SELECT_HEADERS,
    SELECT_HEADER_COLUMN, SELECT_LAST_ROW, SHEET_EXISTS, UPSERT_CELL,
};

impl Database {
    fn sheet_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(SHEET_EXISTS, [table], |row| row.get(0))
            .map_err(|e| self.translate(e))?;
        Ok(count > 0)
    }

    fn ensure_sheet(&self, table: &str) -> Result<()> {
        if self.sheet_exists(table)? {
            Ok(())
        } else {
            Err(Error::NotFound {
                resource: format!("table '{table}'"),
            })
        }
    }

    fn headers(&self, table: &str) -> Result<Vec<(usize, String)>> {
        let mut stmt = self
            .conn
            .prepare_cached(SELECT_HEADERS)
            .map_err(|e| self.translate(e))?;
        let headers = stmt
            .query_map([table], |row| Ok((row.get::<_, usize>(0)?, row.get(1)?)))
            .map_err(|e| self.translate(e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| self.translate(e))?;
        Ok(headers)
    }
}

fn check_position(row: usize, column: usize) -> Result<()> {
    if row == 0 || column == 0 {
        return Err(Error::Validation {
            field: "cell".into(),
            message: format!("cell positions are 1-based, got row {row} column {column}"),
        });
    }
    Ok(())
}

impl TableStore for Database {
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached(LIST_SHEETS)
            .map_err(|e| self.translate(e))?;
        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| self.translate(e))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(|e| self.translate(e))?;
        Ok(names)
    }

    fn has_table(&self, table: &str) -> Result<bool> {
        self.sheet_exists(table)
    }

    fn get_all_rows(&self, table: &str) -> Result<Vec<Record>> {
        self.ensure_sheet(table)?;
        let headers = self.headers(table)?;

        let mut stmt = self
            .conn
            .prepare_cached(SELECT_DATA_CELLS)
            .map_err(|e| self.translate(e))?;
        let cells = stmt
            .query_map([table], |row| {
                Ok((
                    row.get::<_, usize>(0)?,
                    row.get::<_, usize>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| self.translate(e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| self.translate(e))?;

        let mut grid: BTreeMap<usize, BTreeMap<usize, String>> = BTreeMap::new();
        for (row, column, value) in cells {
            grid.entry(row).or_default().insert(column, value);
        }

        let records = grid
            .into_iter()
            .map(|(row, mut columns)| {
                let fields = headers
                    .iter()
                    .map(|(column, header)| {
                        (header.clone(), columns.remove(column).unwrap_or_default())
                    })
                    .collect();
                Record::new(row, fields)
            })
            .collect();
        Ok(records)
    }

    fn find_cell(&self, table: &str, value: &str) -> Result<Option<CellRef>> {
        self.ensure_sheet(table)?;
        self.conn
            .query_row(FIND_CELL, params![table, value], |row| {
                Ok(CellRef::new(row.get(0)?, row.get(1)?))
            })
            .optional()
            .map_err(|e| self.translate(e))
    }

    fn read_cell(&self, table: &str, row: usize, column: usize) -> Result<Option<String>> {
        check_position(row, column)?;
        self.ensure_sheet(table)?;
        self.conn
            .query_row(SELECT_CELL, params![table, row, column], |r| r.get(0))
            .optional()
            .map_err(|e| self.translate(e))
    }

    fn write_cell(&mut self, table: &str, row: usize, column: usize, value: &str) -> Result<()> {
        check_position(row, column)?;
        self.ensure_sheet(table)?;
        self.conn
            .execute(UPSERT_CELL, params![table, row, column, value])
            .map_err(|e| self.translate(e))?;
        log::debug!("wrote '{table}'!R{row}C{column}");
        Ok(())
    }

    fn append_row(&mut self, table: &str, values: &[String]) -> Result<usize> {
        self.ensure_sheet(table)?;
        let busy_secs = self.busy_timeout_secs();
        let translate = |e: rusqlite::Error| translate_error(e, busy_secs);

        // savepoints nest inside an enclosing BEGIN IMMEDIATE
        let sp = self.conn.savepoint().map_err(translate)?;
        let last: usize = sp
            .query_row(SELECT_LAST_ROW, [table], |row| row.get(0))
            .map_err(translate)?;
        let row = last.max(HEADER_ROW) + 1;
        {
            let mut stmt = sp.prepare_cached(UPSERT_CELL).map_err(translate)?;
            for (offset, value) in values.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                stmt.execute(params![table, row, offset + 1, value])
                    .map_err(translate)?;
            }
        }
        sp.commit().map_err(translate)?;

        log::debug!("appended row {row} to '{table}'");
        Ok(row)
    }

    fn column_index_of(&self, table: &str, header: &str) -> Result<Option<usize>> {
        self.ensure_sheet(table)?;
        self.conn
            .query_row(SELECT_HEADER_COLUMN, params![table, header], |row| row.get(0))
            .optional()
            .map_err(|e| self.translate(e))
    }

    fn create_table(&mut self, table: &str, headers: &[&str]) -> Result<()> {
        if table.trim().is_empty() {
            return Err(Error::Validation {
                field: "table".into(),
                message: "table names cannot be empty".into(),
            });
        }
        if self.sheet_exists(table)? {
            return Err(Error::TableExists {
                table: table.to_string(),
            });
        }

        let busy_secs = self.busy_timeout_secs();
        let translate = |e: rusqlite::Error| translate_error(e, busy_secs);

        let sp = self.conn.savepoint().map_err(translate)?;
        sp.execute(INSERT_SHEET, [table]).map_err(translate)?;
        {
            let mut stmt = sp.prepare_cached(UPSERT_CELL).map_err(translate)?;
            for (offset, header) in headers.iter().enumerate() {
                stmt.execute(params![table, HEADER_ROW, offset + 1, header])
                    .map_err(translate)?;
            }
        }
        sp.commit().map_err(translate)?;

        log::debug!("created table '{table}' with {} column(s)", headers.len());
        Ok(())
    }

    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.in_transaction(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn passenger_table(db: &mut Database) {
        db.create_table(
            "MA101",
            &["first name", "last name", "booking number", "checked in"],
        )
        .unwrap();
    }

    #[test]
    fn test_create_and_list_tables_in_order() {
        let mut db = create_test_database();
        db.create_table("flights", &["flight number"]).unwrap();
        db.create_table("booking numbers", &["booking number"])
            .unwrap();
        db.create_table("MA101", &["first name"]).unwrap();

        assert_eq!(
            db.list_tables().unwrap(),
            vec!["flights", "booking numbers", "MA101"]
        );
        assert!(db.has_table("MA101").unwrap());
        assert!(!db.has_table("MA999").unwrap());
    }

    #[test]
    fn test_create_table_rejects_duplicate() {
        let mut db = create_test_database();
        db.create_table("MA101", &["first name"]).unwrap();

        let err = db.create_table("MA101", &["first name"]).unwrap_err();
        assert!(matches!(err, Error::TableExists { .. }));
    }

    #[test]
    fn test_create_table_rejects_blank_name() {
        let mut db = create_test_database();
        let err = db.create_table("  ", &["first name"]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_append_row_returns_next_index() {
        let mut db = create_test_database();
        passenger_table(&mut db);

        let first = db
            .append_row("MA101", &strings(&["Marie", "Curie", "AB12CD34", "FALSE"]))
            .unwrap();
        let second = db
            .append_row("MA101", &strings(&["Ada", "Lovelace", "XY98ZW76", "FALSE"]))
            .unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 3);
    }

    #[test]
    fn test_append_row_to_header_only_table() {
        let mut db = create_test_database();
        db.create_table("booking numbers", &["booking number"])
            .unwrap();

        let row = db
            .append_row("booking numbers", &strings(&["AB12CD34"]))
            .unwrap();
        assert_eq!(row, 2);
    }

    #[test]
    fn test_get_all_rows_fills_missing_cells() {
        let mut db = create_test_database();
        passenger_table(&mut db);
        db.append_row("MA101", &strings(&["Marie", "", "AB12CD34"]))
            .unwrap();

        let rows = db.get_all_rows("MA101").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row(), 2);
        assert_eq!(rows[0].get("last name"), Some(""));
        assert_eq!(rows[0].get("checked in"), Some(""));
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn test_find_cell_returns_first_match() {
        let mut db = create_test_database();
        passenger_table(&mut db);
        db.append_row("MA101", &strings(&["Ann", "Lee", "AB12CD34", "FALSE"]))
            .unwrap();
        db.append_row("MA101", &strings(&["Bo", "Lee", "EF56GH78", "FALSE"]))
            .unwrap();

        assert_eq!(
            db.find_cell("MA101", "Lee").unwrap(),
            Some(CellRef::new(2, 2))
        );
        assert_eq!(
            db.find_cell("MA101", "EF56GH78").unwrap(),
            Some(CellRef::new(3, 3))
        );
        assert_eq!(db.find_cell("MA101", "ZZ11ZZ11").unwrap(), None);
    }

    #[test]
    fn test_read_and_write_cell() {
        let mut db = create_test_database();
        passenger_table(&mut db);
        db.append_row("MA101", &strings(&["Marie", "Curie", "AB12CD34", "FALSE"]))
            .unwrap();

        db.write_cell("MA101", 2, 4, "TRUE").unwrap();
        assert_eq!(db.read_cell("MA101", 2, 4).unwrap().as_deref(), Some("TRUE"));
        assert_eq!(db.read_cell("MA101", 9, 9).unwrap(), None);
    }

    #[test]
    fn test_cell_positions_are_one_based() {
        let mut db = create_test_database();
        passenger_table(&mut db);

        assert!(db.read_cell("MA101", 0, 1).unwrap_err().is_validation());
        assert!(db.write_cell("MA101", 1, 0, "x").unwrap_err().is_validation());
    }

    #[test]
    fn test_column_index_of() {
        let mut db = create_test_database();
        passenger_table(&mut db);

        assert_eq!(db.column_index_of("MA101", "checked in").unwrap(), Some(4));
        assert_eq!(db.column_index_of("MA101", "luggage").unwrap(), None);
    }

    #[test]
    fn test_unknown_table_is_not_found() {
        let mut db = create_test_database();

        assert!(matches!(
            db.get_all_rows("MA404").unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            db.find_cell("MA404", "x").unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            db.append_row("MA404", &strings(&["x"])).unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn test_atomically_rolls_back_both_writes() {
        let mut db = create_test_database();
        passenger_table(&mut db);
        db.create_table("booking numbers", &["booking number"])
            .unwrap();

        let result: Result<()> = db.atomically(|db| {
            db.append_row("booking numbers", &strings(&["AB12CD34"]))?;
            db.append_row("MA404", &strings(&["Marie"]))?;
            Ok(())
        });

        assert!(result.is_err());
        assert!(db.get_all_rows("booking numbers").unwrap().is_empty());
    }

    #[test]
    fn test_changes_persist_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.db");

        {
            let mut db = Database::open(crate::database::DatabaseConfig::new(&path)).unwrap();
            passenger_table(&mut db);
            db.append_row("MA101", &strings(&["Marie", "Curie", "AB12CD34", "FALSE"]))
                .unwrap();
        }

        let db = Database::open(crate::database::DatabaseConfig::new(&path)).unwrap();
        let rows = db.get_all_rows("MA101").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("booking number"), Some("AB12CD34"));
    }
}
