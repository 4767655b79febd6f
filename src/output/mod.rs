mod cli;
mod json;

pub use cli::{print_container_table, print_record_table};
pub use json::print_json;

use crate::model::{ScanRecord, ScanResultContainer};
use anyhow::Result;

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format for programmatic use
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

pub fn print_container(container: &ScanResultContainer, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_container_table(container),
        OutputFormat::Json => print_json(container),
    }
}

pub fn print_record(record: &ScanRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_record_table(record),
        OutputFormat::Json => print_json(record),
    }
}

/// Format a container to string for file output. Tables are written as JSON.
pub fn format_container_to_string(container: &ScanResultContainer) -> Result<String> {
    Ok(serde_json::to_string_pretty(container)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Ok(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
