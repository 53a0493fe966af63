//! Record types flowing through the pipeline

use crate::fields;
use indexmap::IndexMap;

/// Field name to value, in header order
pub type Fields = IndexMap<String, String>;

/// One input row as decoded from the delimited export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub fields: Fields,
}

impl Record {
    pub fn new(row: usize, fields: Fields) -> Self {
        Self { row, fields }
    }

    /// Build a record from `(name, value)` pairs, keeping their order
    pub fn from_pairs<I, K, V>(row: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { row, fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A record whose composite identifier has been decoded and whose comment
/// columns carry their output names.
///
/// Only [`normalize_record`](super::normalize::normalize_record) constructs
/// these, so the derived columns are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    row: usize,
    fields: Fields,
}

impl NormalizedRecord {
    pub(crate) fn from_validated(row: usize, fields: Fields) -> Self {
        Self { row, fields }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn group_code(&self) -> &str {
        self.field(fields::GROUP_CODE)
    }

    pub fn event_code(&self) -> &str {
        self.field(fields::EVENT_CODE)
    }

    pub fn question_code(&self) -> &str {
        self.field(fields::QUESTION_CODE)
    }

    /// Human-readable respondent group, e.g. "Jugendliche"
    pub fn group_label(&self) -> &str {
        self.field(fields::GROUP_LABEL)
    }

    pub fn comment_id(&self) -> &str {
        self.field(fields::OUT_COMMENT_ID)
    }

    pub fn comment_body(&self) -> &str {
        self.field(fields::OUT_COMMENT_BODY)
    }

    /// Drop the normalization guarantee and get the plain row back
    pub fn into_record(self) -> Record {
        Record::new(self.row, self.fields)
    }

    fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}
