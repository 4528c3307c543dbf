//! Transaction management utilities.
//!
//! This module provides the transaction helper behind
//! [`crate::TableStore::atomically`].

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Runs `f` inside a write transaction.
    ///
    /// The transaction is taken with `BEGIN IMMEDIATE` so the write lock is
    /// acquired up front; a concurrent writer makes this fail with
    /// [`crate::Error::LockTimeout`] once the busy timeout elapses, before any of
    /// `f`'s writes happen. If `f` fails, everything it wrote is rolled back.
    ///
    /// Calls nest: when a transaction is already open, `f` joins it.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a storage error if the transaction
    /// cannot be started or committed.
    pub fn in_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if !self.conn.is_autocommit() {
            return f(self);
        }

        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| self.translate(e))?;

        match f(self) {
            Ok(value) => {
                if let Err(e) = self.conn.execute_batch("COMMIT") {
                    let err = self.translate(e);
                    self.rollback();
                    return Err(err);
                }
                Ok(value)
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }

    fn rollback(&self) {
        if self.conn.is_autocommit() {
            return;
        }
        if let Err(e) = self.conn.execute_batch("ROLLBACK") {
            log::warn!("rollback failed: {e}");
        }
    }
}
