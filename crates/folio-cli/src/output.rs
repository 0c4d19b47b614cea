//! Terminal output for CLI commands: page tables, key/value sections, JSON.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use folio_core::error::AppError;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and sections
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print page rows as a table
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("No pages.");
    } else {
        println!("{}", Table::new(rows).with(Style::sharp()));
    }
}

/// Print a titled block of key/value rows
pub fn print_section(title: &str, rows: &[(&str, String)]) {
    println!("[{}]", title);
    for (key, value) in rows {
        print_kv(key, value);
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", key), value);
}
