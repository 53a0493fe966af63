//! Comment-only export
//!
//! Reduces each row to the two columns the analysis job reads, without
//! partitioning. Useful when a whole export is analysed as one dataset.

use super::record::{Fields, Record};
use crate::error::{Result, SplitError};
use crate::fields;
use std::path::{Path, PathBuf};

pub const TRANSFORMED_MARKER: &str = "transformed";

/// Keep only `comment-id` and `comment-body`
pub fn transform_record(record: &Record) -> Result<Fields> {
    let take = |name: &str| {
        record
            .get(name)
            .map(str::to_string)
            .ok_or_else(|| SplitError::missing_field(record.row, name))
    };

    let mut out = Fields::with_capacity(2);
    out.insert(fields::OUT_COMMENT_ID.to_string(), take(fields::COMMENT_ID)?);
    out.insert(fields::OUT_COMMENT_BODY.to_string(), take(fields::COMMENT_TEXT)?);
    Ok(out)
}

pub fn transform_records(records: &[Record]) -> Result<Vec<Fields>> {
    records.iter().map(transform_record).collect()
}

/// `quotes.csv` becomes `quotes.transformed.csv`, next to the input
pub fn transformed_path(input_file: &Path) -> PathBuf {
    let name = match (input_file.file_stem(), input_file.extension()) {
        (Some(stem), Some(ext)) => format!(
            "{}.{}.{}",
            stem.to_string_lossy(),
            TRANSFORMED_MARKER,
            ext.to_string_lossy()
        ),
        (Some(stem), None) => format!("{}.{}", stem.to_string_lossy(), TRANSFORMED_MARKER),
        _ => TRANSFORMED_MARKER.to_string(),
    };
    input_file.with_file_name(name)
}
