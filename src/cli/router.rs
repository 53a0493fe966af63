//! Command routing and execution

use crate::app::AppConfig;
use crate::catalog::{CatalogSelector, EventCatalogs};
use crate::cli::args::Commands;
use crate::config::{load_settings, settings::delimiter_byte, Settings};
use crate::pipeline::{run_split, run_transform, SplitOptions, SplitReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, app: &AppConfig) -> Result<()> {
    let mut settings = load_settings(app.settings_path.as_deref())
        .await
        .context("Failed to load settings")?;

    match command {
        Commands::Split {
            file,
            write_out,
            workshop_questions,
            survey_questions,
            model,
            delimiter,
        } => {
            apply_catalog_flags(&mut settings, workshop_questions, survey_questions);
            if let Some(model) = model {
                settings.job.set_model(model);
            }
            if let Some(delimiter) = delimiter {
                settings.input.delimiter = delimiter;
            }
            settings.validate().context("Invalid command-line settings")?;

            let options = SplitOptions {
                input: file,
                write_out,
                settings,
            };
            let report = run_split(&options)
                .await
                .with_context(|| format!("Failed to split {}", options.input.display()))?;
            print_report(&report);
            Ok(())
        }
        Commands::Transform { file, delimiter } => {
            let delimiter = delimiter_byte(delimiter.unwrap_or(settings.input.delimiter))?;
            let target = run_transform(&file, delimiter)
                .await
                .with_context(|| format!("Failed to transform {}", file.display()))?;
            println!("File saved as {}", target.display());
            Ok(())
        }
        Commands::Question {
            event,
            question,
            workshop_questions,
            survey_questions,
        } => {
            apply_catalog_flags(&mut settings, workshop_questions, survey_questions);
            let catalogs = EventCatalogs::load(
                &settings.input.workshop_questions,
                &settings.input.survey_questions,
            )
            .await
            .context("Failed to load question catalogs")?;

            match catalogs.resolve(&event, &question) {
                Some(found) => println!("{}", serde_json::to_string_pretty(found)?),
                None => println!(
                    "Question '{}' is not defined in the {} catalog",
                    question,
                    catalogs.select(&event).name()
                ),
            }
            Ok(())
        }
    }
}

fn apply_catalog_flags(
    settings: &mut Settings,
    workshop: Option<PathBuf>,
    survey: Option<PathBuf>,
) {
    if let Some(path) = workshop {
        settings.input.workshop_questions = path;
    }
    if let Some(path) = survey {
        settings.input.survey_questions = path;
    }
}

fn print_report(report: &SplitReport) {
    for partition in &report.partitions {
        if partition.written {
            println!("File saved as {}", partition.paths.records.display());
            println!("File saved as \"{}\"", partition.paths.config.display());
        } else {
            println!(
                "{} {} records -> {} ({} catalog, question {})",
                partition.key,
                partition.record_count,
                partition.paths.records.display(),
                partition.catalog,
                if partition.config.is_question_resolved() {
                    "resolved"
                } else {
                    "undefined"
                }
            );
        }
    }

    let unresolved = report.unresolved().count();
    println!(
        "{} records in {} partitions{}",
        report.record_count,
        report.partitions.len(),
        if unresolved > 0 {
            format!(", {} with undefined questions", unresolved)
        } else {
            String::new()
        }
    );
    if report.partitions.iter().all(|p| !p.written) && !report.partitions.is_empty() {
        println!("Dry run: nothing written, pass --write-out to save");
    }
}
