//! Question catalogs
//!
//! Workshop and survey events ask different question sets, each kept in its
//! own static JSON document. Partitions resolve their question code through a
//! [`CatalogSelector`], which picks exactly one catalog from the event code.

use crate::error::{ErrorCode, Result, SplitError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Event code marking workshop events. Every other code is a survey.
pub const WORKSHOP_EVENT_CODE: &str = "W";

/// One catalog entry. Fields beyond `id` and `text` are kept as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("question id '{0}' appears more than once")]
pub struct DuplicateQuestionId(pub String);

/// On-disk shape: `{"questions": [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { questions: Vec<Question> },
    Bare(Vec<Question>),
}

/// A list of questions with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    name: String,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(
        name: impl Into<String>,
        questions: Vec<Question>,
    ) -> std::result::Result<Self, DuplicateQuestionId> {
        let duplicate = {
            let mut seen = HashSet::new();
            questions
                .iter()
                .find(|q| !seen.insert(q.id.as_str()))
                .map(|q| q.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(DuplicateQuestionId(id));
        }

        Ok(Self {
            name: name.into(),
            questions,
        })
    }

    /// Parse a catalog document. `source` only labels errors.
    pub fn from_json_str(name: impl Into<String>, json: &str, source: &Path) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json).map_err(|e| {
            SplitError::catalog(ErrorCode::CATALOG_PARSE_ERROR, source, e.to_string())
        })?;
        let questions = match document {
            CatalogDocument::Wrapped { questions } | CatalogDocument::Bare(questions) => questions,
        };

        Self::new(name, questions).map_err(|e| {
            SplitError::catalog(ErrorCode::CATALOG_DUPLICATE_ID, source, e.to_string())
        })
    }

    /// Read and parse a catalog file
    pub async fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SplitError::io(path, e))?;
        Self::from_json_str(name, &json, path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a question by id. An unknown id is not an error.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Chooses the catalog a partition's question code is resolved against
pub trait CatalogSelector {
    /// The single catalog consulted for `event_code`
    fn select(&self, event_code: &str) -> &QuestionCatalog;

    fn resolve(&self, event_code: &str, question_code: &str) -> Option<&Question> {
        self.select(event_code).get(question_code)
    }
}

/// The workshop/survey catalog pair
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalogs {
    pub workshop: QuestionCatalog,
    pub survey: QuestionCatalog,
}

impl EventCatalogs {
    pub fn new(workshop: QuestionCatalog, survey: QuestionCatalog) -> Self {
        Self { workshop, survey }
    }

    pub async fn load(workshop: &Path, survey: &Path) -> Result<Self> {
        Ok(Self {
            workshop: QuestionCatalog::load("workshop", workshop).await?,
            survey: QuestionCatalog::load("survey", survey).await?,
        })
    }
}

impl CatalogSelector for EventCatalogs {
    fn select(&self, event_code: &str) -> &QuestionCatalog {
        if event_code == WORKSHOP_EVENT_CODE {
            &self.workshop
        } else {
            &self.survey
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalogs() -> EventCatalogs {
        EventCatalogs::new(
            QuestionCatalog::new(
                "workshop",
                vec![
                    Question::new("Q1", "Workshop question one"),
                    Question::new("Q2", "Workshop question two"),
                ],
            )
            .unwrap(),
            QuestionCatalog::new(
                "survey",
                vec![
                    Question::new("Q1", "Survey question one"),
                    Question::new("Q3", "Survey question three"),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_workshop_events_use_workshop_catalog() {
        let catalogs = catalogs();
        assert_eq!(catalogs.select("W").name(), "workshop");
        assert_eq!(
            catalogs.resolve("W", "Q1").map(|q| q.text.as_str()),
            Some("Workshop question one")
        );
        // Q3 only exists in the survey catalog
        assert!(catalogs.resolve("W", "Q3").is_none());
    }

    #[test]
    fn test_other_events_use_survey_catalog() {
        let catalogs = catalogs();
        for event in ["U", "", "w", "WS"] {
            assert_eq!(catalogs.select(event).name(), "survey");
        }
        assert_eq!(
            catalogs.resolve("U", "Q1").map(|q| q.text.as_str()),
            Some("Survey question one")
        );
        assert!(catalogs.resolve("U", "Q2").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = QuestionCatalog::new(
            "survey",
            vec![Question::new("Q1", "a"), Question::new("Q1", "b")],
        )
        .unwrap_err();
        assert_eq!(err, DuplicateQuestionId("Q1".to_string()));
    }

    #[test]
    fn test_parse_wrapped_document_keeps_extra_fields() {
        let json = json!({
            "questions": [
                {"id": "Q1", "text": "Wie digital ist Berlin?", "kind": "open", "order": 1}
            ]
        })
        .to_string();

        let catalog =
            QuestionCatalog::from_json_str("workshop", &json, Path::new("q.json")).unwrap();
        let question = catalog.get("Q1").unwrap();
        assert_eq!(question.text, "Wie digital ist Berlin?");
        assert_eq!(question.extra["kind"], "open");
        assert_eq!(question.extra["order"], 1);
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"id": "Q1", "text": "one"}, {"id": "Q2", "text": "two"}]"#;
        let catalog = QuestionCatalog::from_json_str("survey", json, Path::new("q.json")).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let err = QuestionCatalog::from_json_str("survey", "{", Path::new("broken.json"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CATALOG_PARSE_ERROR);
        assert!(err.to_string().contains("broken.json"));

        let dup = r#"{"questions": [{"id": "Q1", "text": "a"}, {"id": "Q1", "text": "b"}]}"#;
        let err = QuestionCatalog::from_json_str("survey", dup, Path::new("dup.json"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CATALOG_DUPLICATE_ID);
    }
}
