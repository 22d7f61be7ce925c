//! Row set model and ASCII table rendering.
//!
//! This crate defines the data model shared by every rowgrid backend:
//!
//! - [`RowSet`] — an ordered header plus ordered data rows, all values
//!   pre-stringified. The column-count invariant is enforced at
//!   construction time, so downstream consumers never see ragged rows.
//! - [`render_table`] — renders a [`RowSet`] as a bordered ASCII table
//!   with centered headers and right-justified values.
//!
//! # Example
//!
//! ```
//! use rowgrid_core::{RowSet, render_table};
//!
//! let mut rows = RowSet::new(["id", "name"]).unwrap();
//! rows.push_row(["1", "espresso"]).unwrap();
//! rows.push_row(["2", "flat white"]).unwrap();
//!
//! let table = render_table(&rows);
//! assert!(table.starts_with('+'));
//! assert!(table.contains("espresso"));
//! ```

mod error;
mod format;
mod rowset;

pub use error::RowSetError;
pub use format::render_table;
pub use rowset::RowSet;
