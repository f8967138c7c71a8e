//! Columns command implementation.

use crate::config::Config;
use crate::output::Formatter;
use casepull_extractor::{FieldExtractor, DEFAULT_COLUMNS};

/// Execute the columns command.
pub fn execute_columns(config: &Config, formatter: &Formatter) {
    let extractor = FieldExtractor::new(config.extractor.clone());
    let columns: Vec<(&str, &str)> = extractor
        .available_columns()
        .into_iter()
        .filter_map(|name| extractor.column(name))
        .map(|column| (column.name, column.source))
        .collect();

    println!("{}", formatter.columns_table(&columns));
    println!(
        "{}",
        formatter.info(&format!("Default columns: {}", DEFAULT_COLUMNS.join(", ")))
    );
}
