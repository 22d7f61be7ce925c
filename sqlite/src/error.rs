//! Error types for SQL access operations.
//!
//! Provides a unified error type covering statement building, execution,
//! and row extraction failures. Execution errors carry the statement text
//! that failed, so callers and tests can assert on failure paths instead
//! of scraping console output.

use rowgrid_core::RowSetError;
use thiserror::Error;

/// Errors that can occur during SQL access operations.
#[derive(Debug, Error)]
pub enum AccessError {
    /// SQLite failure outside statement execution (open, prepare, read).
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A DDL/DML statement (CREATE, INSERT) failed to execute.
    #[error("statement failed: {sql}: {source}")]
    StatementFailed {
        /// The statement text that failed.
        sql: String,
        /// Underlying SQLite error.
        source: rusqlite::Error,
    },

    /// A SELECT failed to execute.
    #[error("query failed: {sql}: {source}")]
    QueryFailed {
        /// The query text that failed.
        sql: String,
        /// Underlying SQLite error.
        source: rusqlite::Error,
    },

    /// Caller supplied input a statement cannot be built from
    /// (e.g. an empty column list).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Table or column name contains invalid characters.
    #[error("invalid identifier '{0}': must contain only alphanumeric characters and underscores")]
    InvalidIdentifier(String),

    /// Extracted rows violated the row set invariant.
    #[error("row set error: {0}")]
    RowSet(#[from] RowSetError),
}

/// Convenience alias for results with [`AccessError`].
pub type Result<T> = std::result::Result<T, AccessError>;
