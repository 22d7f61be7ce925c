//! Statement execution against a SQLite connection.
//!
//! Provides [`SqlExecutor`] for running the three supported operations
//! (CREATE TABLE, INSERT, SELECT) over a borrowed connection. SELECT
//! results are materialized into a [`RowSet`] before returning; no live
//! cursor ever escapes this module. Every failure surfaces as a typed
//! [`AccessError`](crate::AccessError) carrying the statement text.
//!
//! # Example
//!
//! ```no_run
//! use rowgrid_sqlite::{CreateTable, SqlExecutor};
//! use rusqlite::Connection;
//!
//! let conn = Connection::open("orders.db").unwrap();
//! let exec = SqlExecutor::new(&conn);
//!
//! let outcome = exec
//!     .create_table("orders", &["id INTEGER PRIMARY KEY", "dish TEXT"])
//!     .unwrap();
//! assert_eq!(outcome, CreateTable::Created);
//!
//! exec.insert("orders", &["id", "dish"], &["1", "espresso"]).unwrap();
//!
//! let rows = exec.select_all("orders").unwrap();
//! assert_eq!(rows.row_count(), 1);
//! ```

use rowgrid_core::RowSet;
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::{debug, warn};

use crate::error::{AccessError, Result};
use crate::statement;

/// Outcome of a CREATE TABLE operation.
///
/// A collision with an existing table is an expected condition, not an
/// error; anything else surfaces as
/// [`AccessError::StatementFailed`](crate::AccessError::StatementFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTable {
    /// The table was created.
    Created,
    /// A table with that name already exists; nothing was changed.
    AlreadyExists,
}

/// Executes built statements over a borrowed SQLite connection.
///
/// The connection is injected per executor rather than held in shared
/// static state, so each caller controls the connection's lifetime and
/// scope. The executor itself holds no other state and is cheap to
/// construct.
pub struct SqlExecutor<'a> {
    conn: &'a Connection,
}

impl<'a> SqlExecutor<'a> {
    /// Creates an executor over the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Creates a table from raw column definitions.
    ///
    /// Returns [`CreateTable::AlreadyExists`] when a table with that name
    /// is already present, leaving the existing table untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MalformedInput`] for an empty definition
    /// list and [`AccessError::StatementFailed`] for any other execution
    /// failure, carrying the statement text.
    pub fn create_table<S: AsRef<str>>(
        &self,
        table: &str,
        column_defs: &[S],
    ) -> Result<CreateTable> {
        let sql = statement::create_table_sql(table, column_defs)?;
        debug!(sql = %sql, "Executing statement");

        match self.conn.execute(&sql, []) {
            Ok(_) => Ok(CreateTable::Created),
            Err(source) if is_already_exists(&source) => {
                warn!(table = table, "Table already exists");
                Ok(CreateTable::AlreadyExists)
            }
            Err(source) => Err(AccessError::StatementFailed { sql, source }),
        }
    }

    /// Inserts one tuple into the named columns of a table.
    ///
    /// Values bind to numbered placeholders; they are never interpolated
    /// into the statement text.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MalformedInput`] if `columns` and `values`
    /// differ in length (or are empty), and
    /// [`AccessError::StatementFailed`] with the statement text if
    /// execution fails.
    pub fn insert<S: AsRef<str>>(&self, table: &str, columns: &[S], values: &[S]) -> Result<()> {
        if columns.len() != values.len() {
            return Err(AccessError::MalformedInput(format!(
                "INSERT has {} columns but {} values",
                columns.len(),
                values.len()
            )));
        }
        let sql = statement::insert_sql(table, columns)?;
        debug!(sql = %sql, "Executing statement");

        let params = rusqlite::params_from_iter(values.iter().map(|v| v.as_ref()));
        self.conn
            .execute(&sql, params)
            .map_err(|source| AccessError::StatementFailed { sql, source })?;
        Ok(())
    }

    /// Selects all columns of a table.
    pub fn select_all(&self, table: &str) -> Result<RowSet> {
        self.select_where(&["*"], table, None)
    }

    /// Selects all columns of a table matching a raw WHERE condition.
    pub fn select_all_where(&self, table: &str, condition: &str) -> Result<RowSet> {
        self.select_where(&["*"], table, Some(condition))
    }

    /// Selects the named columns of a table.
    pub fn select_columns<S: AsRef<str>>(&self, columns: &[S], table: &str) -> Result<RowSet> {
        self.select_where(columns, table, None)
    }

    /// Selects the named columns of a table, optionally filtered by a raw
    /// WHERE condition.
    ///
    /// The result is fully materialized: column names from the prepared
    /// statement become the header, and every value is stringified (NULL
    /// becomes the empty string) before the statement is finalized.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::QueryFailed`] with the query text if
    /// preparation or execution fails.
    pub fn select_where<S: AsRef<str>>(
        &self,
        columns: &[S],
        table: &str,
        condition: Option<&str>,
    ) -> Result<RowSet> {
        let sql = statement::select_sql(columns, table, condition)?;
        debug!(sql = %sql, "Executing query");

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|source| AccessError::QueryFailed {
                sql: sql.clone(),
                source,
            })?;

        let header: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let column_count = header.len();
        let mut rows = RowSet::new(header)?;

        let mut raw = stmt.query([]).map_err(|source| AccessError::QueryFailed {
            sql: sql.clone(),
            source,
        })?;
        loop {
            let row = match raw.next() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(source) => return Err(AccessError::QueryFailed { sql, source }),
            };
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(value_to_text(row.get_ref(i)?));
            }
            rows.push_row(values)?;
        }

        Ok(rows)
    }

    /// Returns the underlying connection.
    pub fn connection(&self) -> &Connection {
        self.conn
    }
}

/// Stringifies a SQLite value. NULL becomes the empty string; blobs are
/// decoded as lossy UTF-8.
fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

/// Whether an execution error is SQLite reporting a table name collision.
fn is_already_exists(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("already exists"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_text_null_is_empty() {
        assert_eq!(value_to_text(ValueRef::Null), "");
    }

    #[test]
    fn test_value_to_text_numbers() {
        assert_eq!(value_to_text(ValueRef::Integer(42)), "42");
        assert_eq!(value_to_text(ValueRef::Real(1.5)), "1.5");
    }

    #[test]
    fn test_value_to_text_text() {
        assert_eq!(value_to_text(ValueRef::Text(b"espresso")), "espresso");
    }

    #[test]
    fn test_insert_length_mismatch_is_malformed() {
        let conn = Connection::open_in_memory().unwrap();
        let exec = SqlExecutor::new(&conn);
        let err = exec.insert("orders", &["a", "b"], &["1"]).unwrap_err();
        assert!(matches!(err, AccessError::MalformedInput(_)));
    }
}
