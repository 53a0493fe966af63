use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SplitError>;

/// The unified error type for survey-split
///
/// Row numbers are 1-based data rows (the header row is not counted).
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("[E2000] Malformed identifier in row {row}: {reason}")]
    MalformedIdentifier {
        row: usize,
        value: Option<String>,
        reason: String,
    },

    #[error("[E2001] Row {row} is missing required field '{field}'")]
    MissingRequiredField { row: usize, field: String },

    #[error("[E2002] Delimited text error: {0}")]
    Csv(#[from] csv::Error),

    #[error("[E{code:04}] Question catalog {}: {message}", .path.display())]
    Catalog {
        code: u16,
        path: PathBuf,
        message: String,
    },

    #[error("[E{code:04}] Settings error: {message}")]
    Settings { code: u16, message: String },

    #[error("[E3001] Input file does not exist: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("[E3000] I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[E3002] Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SplitError {
    /// Create a malformed identifier error for a data row
    pub fn malformed_identifier(
        row: usize,
        value: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedIdentifier {
            row,
            value: value.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// Create a missing field error for a data row
    pub fn missing_field(row: usize, field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            row,
            field: field.into(),
        }
    }

    /// Create a catalog error with a specific code
    pub fn catalog(code: u16, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Catalog {
            code,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a settings error with a specific code
    pub fn settings(code: u16, message: impl Into<String>) -> Self {
        Self::Settings {
            code,
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::MalformedIdentifier { .. } => ErrorCode::RECORD_MALFORMED_IDENTIFIER,
            Self::MissingRequiredField { .. } => ErrorCode::RECORD_MISSING_FIELD,
            Self::Csv(_) => ErrorCode::RECORD_PARSE_ERROR,
            Self::Catalog { code, .. } | Self::Settings { code, .. } => *code,
            Self::InputNotFound { .. } => ErrorCode::STORAGE_INPUT_NOT_FOUND,
            Self::Io { .. } => ErrorCode::STORAGE_IO_ERROR,
            Self::Json(_) => ErrorCode::STORAGE_SERIALIZATION_ERROR,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Settings { .. } | Self::Catalog { .. } => 2,
            Self::MalformedIdentifier { .. }
            | Self::MissingRequiredField { .. }
            | Self::Csv(_) => 3,
            Self::InputNotFound { .. } | Self::Io { .. } | Self::Json(_) => 4,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedIdentifier { row, value, reason } => match value {
                Some(v) => format!("Row {}: identifier '{}' is malformed ({})", row, v, reason),
                None => format!("Row {}: {}", row, reason),
            },
            Self::MissingRequiredField { row, field } => {
                format!("Row {} has no '{}' column", row, field)
            }
            Self::Csv(e) => format!("Could not read the delimited input: {}", e),
            Self::Catalog { path, message, .. } => {
                format!("Question catalog {} is invalid: {}", path.display(), message)
            }
            Self::Settings { message, .. } => format!("Settings problem: {}", message),
            Self::InputNotFound { path } => format!("file does not exist: {}", path.display()),
            Self::Io { path, source } => format!("{}: {}", path.display(), source),
            Self::Json(e) => format!("Could not serialize output: {}", e),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        format!("{:#} ({})", self, describe_error_code(self.code()))
    }
}
