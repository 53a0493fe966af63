//! Common test utilities and helpers
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "Kürzel;Q;ID;Quote;Akteursgruppe";

pub const WORKSHOP_CATALOG: &str = r#"{
  "questions": [
    {"id": "Q1", "text": "Was wünschen Sie sich für Ihren Kiez?"},
    {"id": "Q2", "text": "Welche digitalen Angebote nutzen Sie?", "section": "Alltag"}
  ]
}"#;

pub const SURVEY_CATALOG: &str = r#"{
  "questions": [
    {"id": "Q1", "text": "Wie zufrieden sind Sie mit der Verwaltung?"},
    {"id": "Q3", "text": "Was sollte die Stadt digitalisieren?"}
  ]
}"#;

/// Temporary directory holding an export and both question catalogs
pub struct Fixture {
    pub temp_dir: TempDir,
    pub export: PathBuf,
    pub workshop: PathBuf,
    pub survey: PathBuf,
}

impl Fixture {
    /// Create a fixture whose export contains `rows` below the header
    pub fn new(rows: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let export = temp_dir.path().join("quotes.csv");
        let workshop = temp_dir.path().join("questions-workshop.json");
        let survey = temp_dir.path().join("questions-survey.json");

        let mut data = String::from(HEADER);
        data.push('\n');
        for row in rows {
            data.push_str(row);
            data.push('\n');
        }

        fs::write(&export, data).expect("write export");
        fs::write(&workshop, WORKSHOP_CATALOG).expect("write workshop catalog");
        fs::write(&survey, SURVEY_CATALOG).expect("write survey catalog");

        Self {
            temp_dir,
            export,
            workshop,
            survey,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn split_dir(&self) -> PathBuf {
        self.path().join("split")
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.split_dir().join(name)).expect("read split output")
    }
}
