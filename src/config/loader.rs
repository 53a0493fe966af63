//! Layered settings loading
//!
//! Precedence, lowest first: built-in defaults, the settings file, then
//! `SURVEY_SPLIT_*` environment variables. Command-line flags are applied on
//! top by the caller.

use super::settings::Settings;
use crate::error::{ErrorCode, Result, SplitError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_MODEL: &str = "SURVEY_SPLIT_MODEL";
pub const ENV_WORKSHOP_QUESTIONS: &str = "SURVEY_SPLIT_WORKSHOP_QUESTIONS";
pub const ENV_SURVEY_QUESTIONS: &str = "SURVEY_SPLIT_SURVEY_QUESTIONS";

/// Settings file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Yaml,
}

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse settings text in the given format
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<Settings> {
    let parsed = match format {
        SettingsFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        SettingsFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| SplitError::settings(ErrorCode::SETTINGS_PARSE_ERROR, message))
}

/// Load settings from an optional file and the process environment
pub async fn load_settings(path: Option<&Path>) -> Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok()).await
}

/// Load settings with a custom environment lookup
pub async fn load_settings_with<F>(path: Option<&Path>, env: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => {
            let format = SettingsFormat::from_path(path).ok_or_else(|| {
                SplitError::settings(
                    ErrorCode::SETTINGS_INVALID,
                    format!(
                        "settings file {} must end in .toml, .yaml or .yml",
                        path.display()
                    ),
                )
            })?;
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| SplitError::io(path, e))?;
            debug!("Loaded settings from {}", path.display());
            parse_settings(&content, format)?
        }
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, env);
    settings.validate()?;
    Ok(settings)
}

/// Apply `SURVEY_SPLIT_*` variables
pub fn apply_env_overrides<F>(settings: &mut Settings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(model) = env(ENV_MODEL) {
        debug!("{} overrides the job model", ENV_MODEL);
        settings.job.set_model(model);
    }

    if let Some(path) = env(ENV_WORKSHOP_QUESTIONS) {
        settings.input.workshop_questions = PathBuf::from(path);
    }

    if let Some(path) = env(ENV_SURVEY_QUESTIONS) {
        settings.input.survey_questions = PathBuf::from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("s.toml")),
            Some(SettingsFormat::Toml)
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("s.YML")),
            Some(SettingsFormat::Yaml)
        );
        assert_eq!(SettingsFormat::from_path(Path::new("s.json")), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = parse_settings(
            r#"
[job]
model = "gpt-4o-mini"

[job.clustering]
clusters = 5
"#,
            SettingsFormat::Toml,
        )
        .unwrap();

        assert_eq!(settings.job.model, "gpt-4o-mini");
        assert_eq!(settings.job.clustering.clusters, 5);
        assert_eq!(settings.job.extraction.workers, 3);
        assert_eq!(settings.input.delimiter, ';');
    }

    #[test]
    fn test_yaml_settings() {
        let settings = parse_settings(
            "input:\n  delimiter: \",\"\n  survey_questions: data/survey.json\n",
            SettingsFormat::Yaml,
        )
        .unwrap();

        assert_eq!(settings.input.delimiter, ',');
        assert_eq!(settings.input.survey_questions, PathBuf::from("data/survey.json"));
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let err = parse_settings("[job\nmodel=", SettingsFormat::Toml).unwrap_err();
        assert_eq!(err.code(), ErrorCode::SETTINGS_PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(
            &path,
            "[job]\nmodel = \"from-file\"\n\n[job.translation]\nmodel = \"translator\"\n",
        )
        .unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_MODEL, "from-env"),
            (ENV_WORKSHOP_QUESTIONS, "/etc/questions/w.json"),
        ]);
        let settings = load_settings_with(Some(&path), |key| env.get(key).map(|v| v.to_string()))
            .await
            .unwrap();

        assert_eq!(settings.job.model, "from-env");
        assert_eq!(settings.job.translation.model, "translator");
        assert_eq!(
            settings.input.workshop_questions,
            PathBuf::from("/etc/questions/w.json")
        );
    }

    #[tokio::test]
    async fn test_env_model_without_file_moves_translation_model() {
        let settings = load_settings_with(None, |key| {
            (key == ENV_MODEL).then(|| "gpt-4o-mini".to_string())
        })
        .await
        .unwrap();

        assert_eq!(settings.job.model, "gpt-4o-mini");
        assert_eq!(settings.job.translation.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = load_settings_with(Some(&path), no_env).await.unwrap_err();
        assert!(matches!(err, SplitError::Io { .. }));
    }

    #[tokio::test]
    async fn test_no_file_gives_defaults() {
        let settings = load_settings_with(None, no_env).await.unwrap();
        assert_eq!(settings, Settings::default());
    }
}
