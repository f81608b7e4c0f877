use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::model::Record;
use crate::utils::error::{MemoQError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = MemoQError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(MemoQError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}

pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => to_csv(records),
    }
}

/// Writes records as CSV.
///
/// Columns are the union of top-level keys, sorted. Nested values are written as compact
/// JSON, nulls and missing keys as empty cells.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let headers: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.data.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers).map_err(csv_error)?;

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|key| cell(record.get(key)))
            .collect();
        writer.write_record(&row).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MemoQError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| MemoQError::InvalidResponse {
        operation: "csv".to_string(),
        message: e.to_string(),
    })
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn csv_error(e: csv::Error) -> MemoQError {
    MemoQError::Io(std::io::Error::other(e))
}
