//! Delimited text parsing and serialization

use crate::core::record::{Fields, Record};
use crate::error::{Result, SplitError};
use std::path::Path;

const BOM: char = '\u{feff}';

/// Parse delimited text with a header row into ordered records
pub fn parse_records(data: &str, delimiter: u8) -> Result<Vec<Record>> {
    let data = data.strip_prefix(BOM).unwrap_or(data);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = result?;
        let fields: Fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(Record::new(index + 1, fields));
    }

    Ok(records)
}

/// Read and parse a delimited file
pub async fn read_records(path: &Path, delimiter: u8) -> Result<Vec<Record>> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SplitError::io(path, e))?;
    parse_records(&data, delimiter)
}

/// Serialize rows with a header row taken from the first row's columns.
///
/// Later rows are written in that column order; a column they lack is
/// written empty. No rows means no output at all.
pub fn serialize_records<'a, I>(rows: I, delimiter: u8) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Fields>,
{
    let mut rows = rows.into_iter().peekable();
    let header: Vec<&'a str> = match rows.peek().copied() {
        Some(first) => first.keys().map(String::as_str).collect(),
        None => return Ok(Vec::new()),
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(&header)?;

    for fields in rows {
        writer.write_record(
            header
                .iter()
                .map(|name| fields.get(*name).map_or("", String::as_str)),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| SplitError::Csv(csv::Error::from(e.into_error())))
}
