//! Partition building
//!
//! Groups normalized records by respondent group, then event, then question.
//! Every level keeps first-seen order so that the emitted partitions come out
//! in the same order on every run over the same input.

use super::record::NormalizedRecord;
use indexmap::IndexMap;
use std::fmt;

type QuestionMap = IndexMap<String, Vec<NormalizedRecord>>;
type EventMap = IndexMap<String, QuestionMap>;

/// Identity of a partition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pub group_code: String,
    pub event_code: String,
    pub question_code: String,
}

impl PartitionKey {
    pub fn new(
        group_code: impl Into<String>,
        event_code: impl Into<String>,
        question_code: impl Into<String>,
    ) -> Self {
        Self {
            group_code: group_code.into(),
            event_code: event_code.into(),
            question_code: question_code.into(),
        }
    }

    fn of(record: &NormalizedRecord) -> Self {
        Self::new(
            record.group_code(),
            record.event_code(),
            record.question_code(),
        )
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.group_code, self.event_code, self.question_code
        )
    }
}

/// Borrowed view of one leaf of the partition tree
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    pub group_code: &'a str,
    pub event_code: &'a str,
    pub question_code: &'a str,
    pub records: &'a [NormalizedRecord],
}

impl Partition<'_> {
    pub fn key(&self) -> PartitionKey {
        PartitionKey::new(self.group_code, self.event_code, self.question_code)
    }

    /// The first member record; partitions are never empty
    pub fn first(&self) -> Option<&NormalizedRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Three-level grouping: group code → event code → question code → records
#[derive(Debug, Clone, Default)]
pub struct PartitionSet {
    groups: IndexMap<String, EventMap>,
}

impl PartitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its partition, creating branches on first sight
    pub fn insert(&mut self, record: NormalizedRecord) {
        let PartitionKey {
            group_code,
            event_code,
            question_code,
        } = PartitionKey::of(&record);

        self.groups
            .entry(group_code)
            .or_default()
            .entry(event_code)
            .or_default()
            .entry(question_code)
            .or_default()
            .push(record);
    }

    /// Iterate partitions in emission order
    pub fn iter(&self) -> impl Iterator<Item = Partition<'_>> + '_ {
        self.groups.iter().flat_map(|(group_code, events)| {
            events.iter().flat_map(move |(event_code, questions)| {
                questions
                    .iter()
                    .map(move |(question_code, records)| Partition {
                        group_code,
                        event_code,
                        question_code,
                        records,
                    })
            })
        })
    }

    pub fn get(&self, key: &PartitionKey) -> Option<Partition<'_>> {
        let (group_code, events) = self.groups.get_key_value(&key.group_code)?;
        let (event_code, questions) = events.get_key_value(&key.event_code)?;
        let (question_code, records) = questions.get_key_value(&key.question_code)?;
        Some(Partition {
            group_code,
            event_code,
            question_code,
            records,
        })
    }

    /// Group codes in first-seen order
    pub fn group_codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    /// Event codes of one group in first-seen order
    pub fn event_codes<'a>(&'a self, group_code: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.groups
            .get(group_code)
            .into_iter()
            .flat_map(|events| events.keys().map(String::as_str))
    }

    /// Number of partitions
    pub fn len(&self) -> usize {
        self.groups
            .values()
            .flat_map(|events| events.values())
            .map(|questions| questions.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all partitions
    pub fn record_count(&self) -> usize {
        self.iter().map(|p| p.len()).sum()
    }
}

impl FromIterator<NormalizedRecord> for PartitionSet {
    fn from_iter<I: IntoIterator<Item = NormalizedRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

/// Group normalized records into partitions
pub fn build_partitions(records: Vec<NormalizedRecord>) -> PartitionSet {
    records.into_iter().collect()
}
