//! SQL statement text generation.
//!
//! Builds CREATE TABLE, INSERT, and SELECT statements from plain string
//! inputs. Table and column *names* are validated against an
//! alphanumeric-plus-underscore rule before they are spliced into SQL
//! text; INSERT values never appear in the text at all — they bind to
//! numbered placeholders at execution time. Column *definitions* and
//! WHERE conditions are raw SQL fragments supplied by the caller and are
//! passed through unchanged.
//!
//! Empty argument lists are rejected up front with
//! [`AccessError::MalformedInput`] rather than producing truncated SQL.

use crate::error::{AccessError, Result};

/// Validates that a table or column name contains only alphanumeric
/// characters and underscores.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AccessError::InvalidIdentifier(name.to_string()));
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(AccessError::InvalidIdentifier(name.to_string()));
    }
    Ok(())
}

/// Validates a SELECT column, which may also be the wildcard `*`.
fn validate_select_column(name: &str) -> Result<()> {
    if name == "*" {
        return Ok(());
    }
    validate_identifier(name)
}

/// Generates `CREATE TABLE <table> (<defs>)`.
///
/// Column definitions are raw SQL fragments such as
/// `"id INTEGER PRIMARY KEY"` and are joined with `", "`.
///
/// # Errors
///
/// Returns [`AccessError::MalformedInput`] if `column_defs` is empty or
/// contains a blank definition, and [`AccessError::InvalidIdentifier`]
/// if the table name is invalid.
pub fn create_table_sql<S: AsRef<str>>(table: &str, column_defs: &[S]) -> Result<String> {
    validate_identifier(table)?;
    if column_defs.is_empty() {
        return Err(AccessError::MalformedInput(
            "CREATE TABLE requires at least one column definition".to_string(),
        ));
    }
    for def in column_defs {
        if def.as_ref().trim().is_empty() {
            return Err(AccessError::MalformedInput(
                "column definition must not be blank".to_string(),
            ));
        }
    }

    let defs: Vec<&str> = column_defs.iter().map(AsRef::as_ref).collect();
    Ok(format!("CREATE TABLE {table} ({})", defs.join(", ")))
}

/// Generates `INSERT INTO <table> (<cols>) VALUES (?1, …, ?n)`.
///
/// The statement is parameterized: one numbered placeholder per column,
/// bound at execution time. Values never appear in the statement text.
///
/// # Errors
///
/// Returns [`AccessError::MalformedInput`] if `columns` is empty, and
/// [`AccessError::InvalidIdentifier`] for invalid table or column names.
pub fn insert_sql<S: AsRef<str>>(table: &str, columns: &[S]) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(AccessError::MalformedInput(
            "INSERT requires at least one column".to_string(),
        ));
    }
    for col in columns {
        validate_identifier(col.as_ref())?;
    }

    let cols: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("?{n}")).collect();
    Ok(format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        cols.join(", "),
        placeholders.join(", ")
    ))
}

/// Generates `SELECT <cols> FROM <table>[ WHERE <condition>]`.
///
/// Columns may include the wildcard `*`. The condition, when present, is
/// a raw SQL fragment appended after `WHERE`.
///
/// # Errors
///
/// Returns [`AccessError::MalformedInput`] if `columns` is empty or the
/// condition is blank, and [`AccessError::InvalidIdentifier`] for invalid
/// table or column names.
pub fn select_sql<S: AsRef<str>>(
    columns: &[S],
    table: &str,
    condition: Option<&str>,
) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(AccessError::MalformedInput(
            "SELECT requires at least one column".to_string(),
        ));
    }
    for col in columns {
        validate_select_column(col.as_ref())?;
    }
    if condition.is_some_and(|cond| cond.trim().is_empty()) {
        return Err(AccessError::MalformedInput(
            "WHERE condition must not be blank".to_string(),
        ));
    }

    let cols: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    let mut sql = format!("SELECT {} FROM {table}", cols.join(", "));
    if let Some(cond) = condition {
        sql.push_str(" WHERE ");
        sql.push_str(cond);
    }
    Ok(sql)
}
