//! Record normalization
//!
//! Decodes the composite identifier of a row into its respondent group and
//! event codes and renames the comment columns. Validation happens before any
//! field is touched, so a failing row is never left half-renamed.

use super::record::{Fields, NormalizedRecord, Record};
use crate::error::{Result, SplitError};
use crate::fields;

/// Group and event code decoded from a composite identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIdentifier {
    pub group_code: String,
    pub event_code: String,
}

/// Decode `<group>_<event><digits>` into its codes.
///
/// Only the first two `_`-separated segments are considered. ASCII digits
/// are removed anywhere in the event segment. Returns `None` when the value
/// has no `_`.
pub fn decode_identifier(value: &str) -> Option<DecodedIdentifier> {
    let mut segments = value.split('_');
    let group_code = segments.next()?;
    let event_segment = segments.next()?;

    Some(DecodedIdentifier {
        group_code: group_code.to_string(),
        event_code: event_segment
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect(),
    })
}

/// Normalize a single row
pub fn normalize_record(record: Record) -> Result<NormalizedRecord> {
    let Record {
        row,
        fields: mut columns,
    } = record;

    let identifier = columns
        .get(fields::COMPOSITE_ID)
        .map(String::as_str)
        .ok_or_else(|| {
            SplitError::malformed_identifier(
                row,
                None,
                format!("composite identifier column '{}' is missing", fields::COMPOSITE_ID),
            )
        })?;
    let decoded = decode_identifier(identifier).ok_or_else(|| {
        SplitError::malformed_identifier(row, Some(identifier), "no '_' delimiter")
    })?;

    if let Some(missing) = fields::REQUIRED
        .iter()
        .find(|name| !columns.contains_key(**name))
    {
        return Err(SplitError::missing_field(row, *missing));
    }

    columns.insert(fields::GROUP_CODE.to_string(), decoded.group_code);
    columns.insert(fields::EVENT_CODE.to_string(), decoded.event_code);
    rename(&mut columns, fields::COMMENT_ID, fields::OUT_COMMENT_ID);
    rename(&mut columns, fields::COMMENT_TEXT, fields::OUT_COMMENT_BODY);

    Ok(NormalizedRecord::from_validated(row, columns))
}

/// Normalize every row, stopping at the first structural error
pub fn normalize_records(records: Vec<Record>) -> Result<Vec<NormalizedRecord>> {
    records.into_iter().map(normalize_record).collect()
}

// Renamed columns move to the end of the field order.
fn rename(columns: &mut Fields, from: &str, to: &str) {
    if let Some(value) = columns.shift_remove(from) {
        columns.insert(to.to_string(), value);
    }
}
