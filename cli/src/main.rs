use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rowgrid_core::render_table;
use rowgrid_sqlite::{CreateTable, SqlExecutor};
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "rowgrid")]
#[command(about = "Run SQL statements against a SQLite file and print results as tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a table from raw column definitions.
    CreateTable(CreateTableArgs),
    /// Insert one row into a table.
    Insert(InsertArgs),
    /// Select rows and print them as a table or JSON.
    Select(SelectArgs),
}

#[derive(Debug, Args)]
struct CreateTableArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table name.
    table: String,
    /// Column definitions (e.g. "id INTEGER PRIMARY KEY" "dish TEXT").
    #[arg(required = true)]
    column_defs: Vec<String>,
}

#[derive(Debug, Args)]
struct InsertArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table name.
    table: String,
    /// Comma-separated column names (e.g. id,dish).
    #[arg(long)]
    columns: String,
    /// Comma-separated values, one per column.
    #[arg(long)]
    values: String,
}

#[derive(Debug, Args)]
struct SelectArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table name.
    table: String,
    /// Comma-separated column names; all columns when omitted.
    #[arg(long)]
    columns: Option<String>,
    /// Raw WHERE condition (e.g. "price > 10").
    #[arg(long = "where")]
    condition: Option<String>,
    /// Output format (defaults to table).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::CreateTable(args) => run_create_table(args),
        Command::Insert(args) => run_insert(args),
        Command::Select(args) => run_select(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn run_create_table(args: CreateTableArgs) -> Result<(), String> {
    let conn = open_db(&args.db)?;
    let exec = SqlExecutor::new(&conn);

    let outcome = exec
        .create_table(&args.table, &args.column_defs)
        .map_err(|err| err.to_string())?;
    match outcome {
        CreateTable::Created => println!("Created table '{}'.", args.table),
        CreateTable::AlreadyExists => println!("Table '{}' already exists.", args.table),
    }
    Ok(())
}

fn run_insert(args: InsertArgs) -> Result<(), String> {
    let columns = parse_csv_list(&args.columns);
    let values = parse_csv_list(&args.values);

    let conn = open_db(&args.db)?;
    let exec = SqlExecutor::new(&conn);

    exec.insert(&args.table, &columns, &values)
        .map_err(|err| err.to_string())?;
    println!("Inserted 1 row into '{}'.", args.table);
    Ok(())
}

fn run_select(args: SelectArgs) -> Result<(), String> {
    let conn = open_db(&args.db)?;
    let exec = SqlExecutor::new(&conn);

    let columns = match args.columns {
        Some(ref csv) => parse_csv_list(csv),
        None => vec!["*".to_string()],
    };
    let rows = exec
        .select_where(&columns, &args.table, args.condition.as_deref())
        .map_err(|err| err.to_string())?;

    match args.format.unwrap_or_default() {
        OutputFormat::Table => println!("{}", render_table(&rows)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|err| err.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

fn open_db(path: &Path) -> Result<Connection, String> {
    Connection::open(path).map_err(|err| format!("Failed to open '{}': {err}", path.display()))
}

/// Splits a comma-separated list, trimming whitespace around each entry.
fn parse_csv_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
