//! Split and transform runs
//!
//! The imperative shell around [`crate::core`]: read the export, run the pure
//! stages, then write artifacts when asked to. Every partition is planned
//! before the first write, so row-level errors abort a run with nothing on
//! disk.

use crate::catalog::EventCatalogs;
use crate::config::Settings;
use crate::core::{
    build_partitions, normalize_records, plan_emissions, transform::transform_records,
    transform::transformed_path, JobConfig, PartitionKey, PartitionPaths,
};
use crate::error::{Result, SplitError};
use crate::io::{read_records, serialize_records, write_emission, write_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parameters of one split run
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub input: PathBuf,
    /// Persist artifacts; otherwise the run is a dry run
    pub write_out: bool,
    pub settings: Settings,
}

/// Outcome for one partition
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    pub key: PartitionKey,
    pub record_count: usize,
    pub catalog: String,
    pub paths: PartitionPaths,
    pub config: JobConfig,
    pub written: bool,
}

/// Outcome of a split run, partitions in emission order
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub input: PathBuf,
    pub record_count: usize,
    pub partitions: Vec<PartitionSummary>,
}

impl SplitReport {
    pub fn unresolved(&self) -> impl Iterator<Item = &PartitionSummary> {
        self.partitions
            .iter()
            .filter(|p| !p.config.is_question_resolved())
    }
}

pub async fn ensure_input_exists(path: &Path) -> Result<()> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(SplitError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SplitError::io(path, e)),
    }
}

/// Run a split using catalogs loaded from the configured paths
pub async fn run_split(options: &SplitOptions) -> Result<SplitReport> {
    ensure_input_exists(&options.input).await?;
    let catalogs = EventCatalogs::load(
        &options.settings.input.workshop_questions,
        &options.settings.input.survey_questions,
    )
    .await?;
    run_split_with(options, &catalogs).await
}

/// Run a split against already loaded catalogs
pub async fn run_split_with(options: &SplitOptions, catalogs: &EventCatalogs) -> Result<SplitReport> {
    let settings = &options.settings;
    let delimiter = settings.input.delimiter_byte()?;

    let records = read_records(&options.input, delimiter).await?;
    let record_count = records.len();
    info!("Read {} records from {}", record_count, options.input.display());

    let normalized = normalize_records(records)?;
    let partitions = build_partitions(normalized);
    info!("Built {} partitions", partitions.len());

    let emissions = plan_emissions(
        &partitions,
        &options.input,
        &settings.input.output_extension,
        catalogs,
        &settings.job,
    )?;

    let mut summaries = Vec::with_capacity(emissions.len());
    for emission in &emissions {
        match &emission.config.meta.question {
            Some(question) => debug!(
                "{} resolved against {} catalog: {:?}",
                emission.key, emission.catalog, question.text
            ),
            None => warn!(
                "{}: question '{}' is not in the {} catalog",
                emission.key, emission.key.question_code, emission.catalog
            ),
        }

        if options.write_out {
            write_emission(emission, delimiter).await?;
            info!(
                "Wrote {} records to {}",
                emission.records.len(),
                emission.paths.records.display()
            );
        } else {
            debug!(
                "Dry run, skipping {} and {}",
                emission.paths.records.display(),
                emission.paths.config.display()
            );
        }

        summaries.push(PartitionSummary {
            key: emission.key.clone(),
            record_count: emission.records.len(),
            catalog: emission.catalog.clone(),
            paths: emission.paths.clone(),
            config: emission.config.clone(),
            written: options.write_out,
        });
    }

    Ok(SplitReport {
        input: options.input.clone(),
        record_count,
        partitions: summaries,
    })
}

/// Write a comment-only copy of the export; returns the output path
pub async fn run_transform(input: &Path, delimiter: u8) -> Result<PathBuf> {
    ensure_input_exists(input).await?;

    let records = read_records(input, delimiter).await?;
    let rows = transform_records(&records)?;
    let bytes = serialize_records(rows.iter(), delimiter)?;

    let target = transformed_path(input);
    write_file(&target, &bytes).await?;
    info!("Transformed {} records into {}", rows.len(), target.display());
    Ok(target)
}
