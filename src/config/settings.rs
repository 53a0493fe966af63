//! Settings for the analysis job and the input format
//!
//! Every field has a default, so an empty settings file (or none at all)
//! reproduces the job configuration the workshop team has always used.

use crate::error::{ErrorCode, Result, SplitError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NAME: &str = "Gemeinsam Digital Berlin";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Placeholder replaced with the respondent group label in the intro
pub const GROUP_PLACEHOLDER: &str = "${group}";

pub const DEFAULT_INTRO: &str = "Dieser von KI generierte Bericht stützt sich auf Daten aus den Smart City-Umfragen des Gemeinsam Digital Berlin Teams im CityLAB Berlin. Die Antworten stammen von der folgenden Gruppe: ${group}.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub job: JobSettings,
    pub input: InputSettings,
}

/// Fixed parameters copied into every job configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSettings {
    /// Organization name shown in the report
    pub name: String,
    pub model: String,
    pub extraction: ExtractionSettings,
    pub clustering: ClusteringSettings,
    pub translation: TranslationSettings,
    /// Report introduction; `${group}` is replaced with the group label
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub workers: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringSettings {
    pub clusters: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub model: String,
    /// Target languages, e.g. "English"
    pub languages: Vec<String>,
    /// Short codes matching `languages` position by position
    pub flags: Vec<String>,
}

/// Where inputs come from and how they are delimited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub delimiter: char,
    pub workshop_questions: PathBuf,
    pub survey_questions: PathBuf,
    /// Extension of the per-partition record files
    pub output_extension: String,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            extraction: ExtractionSettings::default(),
            clustering: ClusteringSettings::default(),
            translation: TranslationSettings::default(),
            intro: DEFAULT_INTRO.to_string(),
        }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            workers: 3,
            limit: 12,
        }
    }
}

impl Default for ClusteringSettings {
    fn default() -> Self {
        Self { clusters: 3 }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            languages: vec!["English".to_string(), "German".to_string()],
            flags: vec!["EN".to_string(), "DE".to_string()],
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            delimiter: ';',
            workshop_questions: PathBuf::from("questions-workshop.json"),
            survey_questions: PathBuf::from("questions-survey.json"),
            output_extension: "csv".to_string(),
        }
    }
}

impl JobSettings {
    /// Replace the job model. The translation model follows only while it
    /// still matches the job model, so one configured on its own is kept.
    pub fn set_model(&mut self, model: impl Into<String>) {
        let model = model.into();
        if self.translation.model == self.model {
            self.translation.model = model.clone();
        }
        self.model = model;
    }
}

impl InputSettings {
    /// The delimiter as the single byte the csv reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
    }
}

/// Convert a delimiter character to a byte, rejecting non-ASCII
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() && delimiter != '"' && delimiter != '\n' && delimiter != '\r' {
        Ok(delimiter as u8)
    } else {
        Err(SplitError::settings(
            ErrorCode::SETTINGS_INVALID,
            format!("unsupported delimiter {:?}", delimiter),
        ))
    }
}

impl Settings {
    /// Check values a settings file could get wrong
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| SplitError::settings(ErrorCode::SETTINGS_INVALID, message);
        let job = &self.job;

        if job.model.trim().is_empty() {
            return Err(invalid("job.model must not be empty".to_string()));
        }
        if job.extraction.workers == 0 {
            return Err(invalid("job.extraction.workers must be at least 1".to_string()));
        }
        if job.clustering.clusters == 0 {
            return Err(invalid("job.clustering.clusters must be at least 1".to_string()));
        }
        if job.translation.languages.len() != job.translation.flags.len() {
            return Err(invalid(format!(
                "job.translation has {} languages but {} flags",
                job.translation.languages.len(),
                job.translation.flags.len()
            )));
        }
        if self.input.output_extension.is_empty()
            || self.input.output_extension.contains(['/', '\\', '.'])
        {
            return Err(invalid(format!(
                "input.output_extension {:?} is not a plain extension",
                self.input.output_extension
            )));
        }

        self.input.delimiter_byte().map(|_| ())
    }
}
