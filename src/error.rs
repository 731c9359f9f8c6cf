use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Failure to produce a schema document for a logical name.
#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("Schema `{name}` not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("Cannot read schema `{name}` from {}: {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema `{name}` is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Schema `{name}` does not compile: {message}")]
    Invalid { name: String, message: String },
}

/// Everything that can fail a contract test case.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Invalid harness configuration: {0}")]
    Config(String),
    #[error("Request {method} {url} failed: {source}")]
    Network {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },
    #[error("Field mismatch at `{pointer}`: expected {expected}, got {actual}")]
    FieldMismatch {
        pointer: String,
        expected: String,
        actual: String,
    },
    #[error("Response does not match schema `{schema}`: {}", .errors.join("; "))]
    SchemaValidation { schema: String, errors: Vec<String> },
    #[error(transparent)]
    SchemaLoad(#[from] SchemaLoadError),
    #[error("Response body is not valid JSON: {0}")]
    JsonDecode(#[source] serde_json::Error),
}

/// Error kind (v0), stable in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigError,
    NetworkError,
    UnexpectedStatus,
    FieldMismatch,
    SchemaValidationError,
    SchemaLoadError,
    JsonDecodeError,
}

impl HarnessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::ConfigError,
            Self::Network { .. } => ErrorKind::NetworkError,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::FieldMismatch { .. } => ErrorKind::FieldMismatch,
            Self::SchemaValidation { .. } => ErrorKind::SchemaValidationError,
            Self::SchemaLoad(_) => ErrorKind::SchemaLoadError,
            Self::JsonDecode(_) => ErrorKind::JsonDecodeError,
        }
    }
}
