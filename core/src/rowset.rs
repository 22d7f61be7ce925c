//! The row set data model.
//!
//! A [`RowSet`] is the materialized result of a query: an ordered header
//! naming the columns, followed by ordered data rows. All values are
//! plain strings; backends stringify database values (NULL becomes the
//! empty string) before constructing a row set. The types serialize with
//! [`serde`] so results can round-trip through JSON.

use serde::{Deserialize, Serialize};

use crate::error::RowSetError;

/// An ordered header plus ordered data rows produced by a query.
///
/// Every data row is guaranteed to have exactly as many values as the
/// header has columns. The constructors return [`RowSetError`] instead of
/// ever producing a ragged row set, so the formatter and other consumers
/// can index columns without bounds anxiety.
///
/// # Examples
///
/// ```
/// use rowgrid_core::RowSet;
///
/// let mut rows = RowSet::new(["id", "name"]).unwrap();
/// rows.push_row(["1", "espresso"]).unwrap();
///
/// assert_eq!(rows.column_count(), 2);
/// assert_eq!(rows.row_count(), 1);
/// assert_eq!(rows.rows()[0][1], "espresso");
///
/// // Ragged rows are rejected
/// assert!(rows.push_row(["2"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowSet {
    /// Creates an empty row set with the given column names.
    ///
    /// # Errors
    ///
    /// Returns [`RowSetError::EmptyHeader`] if `header` yields no columns.
    pub fn new<I, S>(header: I) -> Result<Self, RowSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        if header.is_empty() {
            return Err(RowSetError::EmptyHeader);
        }
        Ok(Self {
            header,
            rows: Vec::new(),
        })
    }

    /// Appends a data row.
    ///
    /// # Errors
    ///
    /// Returns [`RowSetError::ColumnCountMismatch`] if the row's value
    /// count differs from the header's column count.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<(), RowSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(RowSetError::ColumnCountMismatch {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// The column names, in order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The data rows, in order. Does not include the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns declared by the header.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the row set has no data rows (the header does not count).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_header() {
        let header: [&str; 0] = [];
        assert_eq!(RowSet::new(header).unwrap_err(), RowSetError::EmptyHeader);
    }

    #[test]
    fn test_push_row_rejects_ragged_rows() {
        let mut rows = RowSet::new(["a", "b"]).unwrap();
        let err = rows.push_row(["1", "2", "3"]).unwrap_err();
        assert_eq!(
            err,
            RowSetError::ColumnCountMismatch {
                expected: 2,
                found: 3
            }
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_push_row_preserves_order() {
        let mut rows = RowSet::new(["a"]).unwrap();
        rows.push_row(["first"]).unwrap();
        rows.push_row(["second"]).unwrap();
        assert_eq!(rows.rows()[0][0], "first");
        assert_eq!(rows.rows()[1][0], "second");
    }

    #[test]
    fn test_empty_values_are_allowed() {
        let mut rows = RowSet::new(["a", "b"]).unwrap();
        rows.push_row(["", ""]).unwrap();
        assert_eq!(rows.row_count(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rows = RowSet::new(["id", "name"]).unwrap();
        rows.push_row(["1", "espresso"]).unwrap();

        let json = serde_json::to_string(&rows).unwrap();
        let back: RowSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
