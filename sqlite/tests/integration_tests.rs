//! Integration tests for the rowgrid-sqlite crate.

use rowgrid_core::render_table;
use rowgrid_sqlite::{AccessError, CreateTable, SqlExecutor};
use rusqlite::Connection;

/// Creates an in-memory connection with an `orders` table.
fn setup_orders(conn: &Connection) {
    let exec = SqlExecutor::new(conn);
    let outcome = exec
        .create_table(
            "orders",
            &["id INTEGER PRIMARY KEY", "dish TEXT", "price TEXT"],
        )
        .unwrap();
    assert_eq!(outcome, CreateTable::Created);
}

// =============================================================================
// CREATE TABLE
// =============================================================================

#[test]
fn test_create_table_twice_reports_already_exists() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    let first = exec.create_table("orders", &["id INTEGER"]).unwrap();
    assert_eq!(first, CreateTable::Created);

    let second = exec.create_table("orders", &["id INTEGER"]).unwrap();
    assert_eq!(second, CreateTable::AlreadyExists);
}

#[test]
fn test_create_table_empty_defs_is_malformed() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    let defs: [&str; 0] = [];
    let err = exec.create_table("orders", &defs).unwrap_err();
    assert!(matches!(err, AccessError::MalformedInput(_)));
}

#[test]
fn test_create_table_bad_definition_carries_statement_text() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    // Valid identifier, invalid SQL inside the definition fragment.
    let err = exec
        .create_table("orders", &["id NOTATYPE PRIMARY WRONG"])
        .unwrap_err();
    match err {
        AccessError::StatementFailed { sql, .. } => {
            assert!(sql.starts_with("CREATE TABLE orders"));
        }
        other => panic!("expected StatementFailed, got {other:?}"),
    }
}

// =============================================================================
// INSERT / SELECT round trips
// =============================================================================

#[test]
fn test_insert_then_select_returns_same_values_as_strings() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["1", "espresso", "3.00"],
    )
    .unwrap();

    let rows = exec.select_all("orders").unwrap();
    assert_eq!(rows.header(), ["id", "dish", "price"]);
    assert_eq!(rows.rows(), [["1", "espresso", "3.00"]]);
}

#[test]
fn test_select_columns_subset_in_order() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["1", "espresso", "3.00"],
    )
    .unwrap();

    let rows = exec.select_columns(&["dish", "id"], "orders").unwrap();
    assert_eq!(rows.header(), ["dish", "id"]);
    assert_eq!(rows.rows(), [["espresso", "1"]]);
}

#[test]
fn test_select_where_filters_rows() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["1", "espresso", "3.00"],
    )
    .unwrap();
    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["2", "flat white", "4.50"],
    )
    .unwrap();

    let rows = exec.select_all_where("orders", "id = 2").unwrap();
    assert_eq!(rows.row_count(), 1);
    assert_eq!(rows.rows()[0][1], "flat white");

    let rows = exec
        .select_where(&["dish"], "orders", Some("price = '3.00'"))
        .unwrap();
    assert_eq!(rows.rows(), [["espresso"]]);
}

#[test]
fn test_null_values_become_empty_strings() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    // Only id is set; dish and price stay NULL.
    exec.insert("orders", &["id"], &["7"]).unwrap();

    let rows = exec.select_all("orders").unwrap();
    assert_eq!(rows.rows(), [["7", "", ""]]);
}

#[test]
fn test_integer_values_are_stringified() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);
    exec.create_table("counters", &["n INTEGER"]).unwrap();
    exec.insert("counters", &["n"], &["42"]).unwrap();

    let rows = exec.select_all("counters").unwrap();
    assert_eq!(rows.rows(), [["42"]]);
}

#[test]
fn test_select_empty_table_is_header_only() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    let rows = exec.select_all("orders").unwrap();
    assert!(rows.is_empty());
    assert_eq!(rows.header(), ["id", "dish", "price"]);
}

#[test]
fn test_quote_in_value_round_trips_unmangled() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    // A single quote would break quoted-literal interpolation; the
    // parameterized INSERT stores it verbatim.
    exec.insert("orders", &["id", "dish"], &["1", "cortado'; --"])
        .unwrap();

    let rows = exec.select_columns(&["dish"], "orders").unwrap();
    assert_eq!(rows.rows(), [["cortado'; --"]]);
}

// =============================================================================
// Failure paths
// =============================================================================

#[test]
fn test_insert_into_missing_table_is_statement_failed() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    let err = exec.insert("nowhere", &["a"], &["1"]).unwrap_err();
    match err {
        AccessError::StatementFailed { sql, .. } => {
            assert_eq!(sql, "INSERT INTO nowhere (a) VALUES (?1)");
        }
        other => panic!("expected StatementFailed, got {other:?}"),
    }
}

#[test]
fn test_select_from_missing_table_is_query_failed() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    let err = exec.select_all("nowhere").unwrap_err();
    match err {
        AccessError::QueryFailed { sql, .. } => {
            assert_eq!(sql, "SELECT * FROM nowhere");
        }
        other => panic!("expected QueryFailed, got {other:?}"),
    }
}

#[test]
fn test_invalid_table_name_rejected_before_execution() {
    let conn = Connection::open_in_memory().unwrap();
    let exec = SqlExecutor::new(&conn);

    let err = exec.select_all("orders; DROP TABLE orders").unwrap_err();
    assert!(matches!(err, AccessError::InvalidIdentifier(_)));
}

// =============================================================================
// Rendering selected results
// =============================================================================

#[test]
fn test_selected_rows_render_exact_table() {
    let conn = Connection::open_in_memory().unwrap();
    setup_orders(&conn);
    let exec = SqlExecutor::new(&conn);

    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["1", "espresso", "3"],
    )
    .unwrap();
    exec.insert(
        "orders",
        &["id", "dish", "price"],
        &["2", "flat white", "4.5"],
    )
    .unwrap();

    let rows = exec.select_columns(&["dish", "price"], "orders").unwrap();
    let expected = "\
+--------------+---------+
|     dish     |  price  |
+--------------+---------+
|    espresso  |      3  |
|  flat white  |    4.5  |
+--------------+---------+";
    assert_eq!(render_table(&rows), expected);
}

// =============================================================================
// On-disk persistence
// =============================================================================

#[test]
fn test_rows_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.db");

    {
        let conn = Connection::open(&path).unwrap();
        setup_orders(&conn);
        let exec = SqlExecutor::new(&conn);
        exec.insert(
            "orders",
            &["id", "dish", "price"],
            &["1", "espresso", "3.00"],
        )
        .unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let exec = SqlExecutor::new(&conn);
    let rows = exec.select_all("orders").unwrap();
    assert_eq!(rows.rows(), [["1", "espresso", "3.00"]]);

    let outcome = exec.create_table("orders", &["id INTEGER"]).unwrap();
    assert_eq!(outcome, CreateTable::AlreadyExists);
}
