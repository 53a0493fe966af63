//! Job configuration emission
//!
//! Turns one partition into the job configuration document the text-analysis
//! service consumes, together with the paths both artifacts are written to.
//! Nothing here touches the file system.

use super::partition::{Partition, PartitionKey, PartitionSet};
use super::paths::{derive_paths, PartitionPaths};
use super::record::NormalizedRecord;
use crate::catalog::{CatalogSelector, Question};
use crate::config::settings::GROUP_PLACEHOLDER;
use crate::config::{ClusteringSettings, ExtractionSettings, JobSettings, TranslationSettings};
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Job configuration for one partition. Field order is the key order of
/// the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobConfig {
    pub name: String,
    /// Resolved question text, empty when the code is not in the catalog
    pub question: String,
    /// Base name of the partition's record file
    pub input: String,
    pub model: String,
    pub extraction: ExtractionSettings,
    pub clustering: ClusteringSettings,
    pub translation: TranslationSettings,
    pub intro: String,
    pub meta: JobMeta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JobMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

impl JobConfig {
    pub fn is_question_resolved(&self) -> bool {
        self.meta.question.is_some()
    }

    /// Two-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Everything needed to persist one partition
#[derive(Debug, Clone)]
pub struct Emission<'a> {
    pub key: PartitionKey,
    /// Name of the catalog the question code was looked up in
    pub catalog: String,
    pub paths: PartitionPaths,
    pub config: JobConfig,
    pub records: &'a [NormalizedRecord],
}

/// Substitute the group label into the intro template
pub fn render_intro(template: &str, group_label: &str) -> String {
    template.replace(GROUP_PLACEHOLDER, group_label)
}

/// Build the job configuration for a partition
pub fn build_job_config(
    settings: &JobSettings,
    input: impl Into<String>,
    question: Option<&Question>,
    group_label: &str,
) -> JobConfig {
    JobConfig {
        name: settings.name.clone(),
        question: question.map(|q| q.text.clone()).unwrap_or_default(),
        input: input.into(),
        model: settings.model.clone(),
        extraction: settings.extraction.clone(),
        clustering: settings.clustering.clone(),
        translation: settings.translation.clone(),
        intro: render_intro(&settings.intro, group_label),
        meta: JobMeta {
            question: question.cloned(),
        },
    }
}

/// Resolve a partition's question and derive its configuration and paths
pub fn emit_partition<'a, S>(
    partition: Partition<'a>,
    input_file: &Path,
    extension: &str,
    selector: &S,
    settings: &JobSettings,
) -> Result<Emission<'a>>
where
    S: CatalogSelector + ?Sized,
{
    let key = partition.key();
    let first_row = partition.first().map_or(0, NormalizedRecord::row);
    let paths = derive_paths(input_file, &key, extension, first_row)?;

    let catalog = selector.select(&key.event_code).name().to_string();
    let question = selector.resolve(&key.event_code, &key.question_code);
    let group_label = partition.first().map_or("", NormalizedRecord::group_label);

    let config = build_job_config(settings, paths.base_name.clone(), question, group_label);

    Ok(Emission {
        catalog,
        key,
        paths,
        config,
        records: partition.records,
    })
}

/// Emit every partition in order. Fails before anything could be written
/// if any partition has a key that cannot become a file name.
pub fn plan_emissions<'a, S>(
    partitions: &'a PartitionSet,
    input_file: &Path,
    extension: &str,
    selector: &S,
    settings: &JobSettings,
) -> Result<Vec<Emission<'a>>>
where
    S: CatalogSelector + ?Sized,
{
    partitions
        .iter()
        .map(|partition| emit_partition(partition, input_file, extension, selector, settings))
        .collect()
}
