use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV file not found: {path}")]
    FileNotFound { path: String },

    #[error("No rows parsed from CSV")]
    EmptyDataset,

    #[error("Could not detect any date column in CSV headers: {headers:?}")]
    NoDateColumn { headers: Vec<String> },

    #[error("Year not found: {year}")]
    YearNotFound { year: i32 },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

impl EngineError {
    /// `YearNotFound` is an expected outcome of a filter query, not a
    /// failure of the computation itself. The transport layer maps it to a
    /// not-found response instead of a server error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::YearNotFound { .. })
    }
}

/// Structured error shape handed across the transport boundary. Fatal
/// errors carry their diagnostic context (the header list for detection
/// failures) so a caller can see what the engine saw.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
}

impl From<&EngineError> for ErrorPayload {
    fn from(err: &EngineError) -> Self {
        tracing::error!(error = %err, "Mapping EngineError to error payload");
        match err {
            EngineError::NoDateColumn { headers } => ErrorPayload {
                error: "Could not detect any date column in CSV headers".to_string(),
                headers: Some(headers.clone()),
            },
            other => ErrorPayload {
                error: other.to_string(),
                headers: None,
            },
        }
    }
}
