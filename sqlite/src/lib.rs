//! SQLite statement building and execution for rowgrid.
//!
//! This crate turns plain string/slice inputs into SQL text and runs the
//! result against an injected [`rusqlite::Connection`]:
//!
//! - **`statement`** — pure statement text generation with identifier
//!   validation and parameterized INSERT placeholders
//! - **`exec`** — [`SqlExecutor`], which executes built statements and
//!   materializes SELECT results into a
//!   [`RowSet`](rowgrid_core::RowSet)
//! - **`error`** — the [`AccessError`] taxonomy; every execution failure
//!   carries the statement text that failed
//!
//! # Quick start
//!
//! ```no_run
//! use rowgrid_core::render_table;
//! use rowgrid_sqlite::SqlExecutor;
//! use rusqlite::Connection;
//!
//! let conn = Connection::open("orders.db").unwrap();
//! let exec = SqlExecutor::new(&conn);
//!
//! exec.create_table("orders", &["id INTEGER PRIMARY KEY", "dish TEXT"]).unwrap();
//! exec.insert("orders", &["id", "dish"], &["1", "espresso"]).unwrap();
//!
//! let rows = exec.select_all_where("orders", "id = 1").unwrap();
//! println!("{}", render_table(&rows));
//! ```

mod error;
mod exec;
mod statement;

pub use error::{AccessError, Result};
pub use exec::{CreateTable, SqlExecutor};
pub use statement::{create_table_sql, insert_sql, select_sql};
