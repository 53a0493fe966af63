//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Split workshop and survey exports into per-question analysis jobs
#[derive(Parser, Debug)]
#[command(name = "survey-split")]
#[command(about = "survey-split - Split survey exports into per-question analysis jobs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (.toml, .yaml or .yml)
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition an export by group, event and question and generate job configurations
    #[command(name = "split")]
    Split {
        /// Delimited export to split
        #[arg(short = 'f', long = "file")]
        file: PathBuf,

        /// Write partition files and job configurations (default is a dry run)
        #[arg(short = 'w', long = "write-out")]
        write_out: bool,

        /// Question catalog for workshop events
        #[arg(long, value_name = "FILE")]
        workshop_questions: Option<PathBuf>,

        /// Question catalog for survey events
        #[arg(long, value_name = "FILE")]
        survey_questions: Option<PathBuf>,

        /// Model named in the job configurations; the translation model
        /// follows unless the settings file sets it separately
        #[arg(long)]
        model: Option<String>,

        /// Field delimiter of the export and the partition files
        #[arg(short = 'd', long)]
        delimiter: Option<char>,
    },

    /// Reduce an export to its comment-id and comment-body columns
    #[command(name = "transform")]
    Transform {
        /// Delimited export to transform
        #[arg(short = 'f', long = "file")]
        file: PathBuf,

        /// Field delimiter of the export
        #[arg(short = 'd', long)]
        delimiter: Option<char>,
    },

    /// Show which catalog entry a partition would be bound to
    #[command(name = "question")]
    Question {
        /// Event code, e.g. W for workshops
        #[arg(long)]
        event: String,

        /// Question code as it appears in the Q column
        #[arg(long)]
        question: String,

        /// Question catalog for workshop events
        #[arg(long, value_name = "FILE")]
        workshop_questions: Option<PathBuf>,

        /// Question catalog for survey events
        #[arg(long, value_name = "FILE")]
        survey_questions: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split_short_flags() {
        let cli = Cli::try_parse_from(["survey-split", "-v", "split", "-f", "quotes.csv", "-w"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Split {
                file, write_out, ..
            } => {
                assert_eq!(file, PathBuf::from("quotes.csv"));
                assert!(write_out);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_split_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["survey-split", "split", "--file", "q.csv"]).unwrap();
        assert!(matches!(cli.command, Commands::Split { write_out: false, .. }));
    }

    #[test]
    fn test_split_requires_file() {
        assert!(Cli::try_parse_from(["survey-split", "split"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "survey-split",
            "transform",
            "-f",
            "q.csv",
            "--config",
            "settings.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("settings.toml")));
    }
}
