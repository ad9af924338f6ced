use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, DocFinderError>;

#[derive(Debug, Error)]
pub enum DocFinderError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("data provider returned status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DocFinderError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpStatus { .. } => "HTTP_STATUS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Http(_) => "HTTP_ERROR",
        }
    }

    /// Whether this error can only arise while fetching or decoding the dataset.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. } | Self::Http(_) | Self::Json(_) | Self::Io(_) | Self::NotFound(_)
        )
    }

    pub fn to_payload(
        &self,
        operation: impl Into<String>,
        source: Option<String>,
    ) -> ErrorPayload {
        let details = match self {
            Self::HttpStatus { status, .. } => Some(serde_json::json!({ "status": status })),
            _ => None,
        };
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            source,
            details,
        }
    }
}
