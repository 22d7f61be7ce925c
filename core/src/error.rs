//! Error types for row set construction.

use thiserror::Error;

/// Errors that can occur while building a [`RowSet`](crate::RowSet).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowSetError {
    /// A row set must have at least one column.
    #[error("row set header must not be empty")]
    EmptyHeader,

    /// A data row did not match the header's column count.
    #[error("row has {found} values but the header has {expected} columns")]
    ColumnCountMismatch {
        /// Column count declared by the header.
        expected: usize,
        /// Value count of the offending row.
        found: usize,
    },
}
