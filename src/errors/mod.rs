//! Error handling module for the Censo client.
//!
//! Provides a centralized error type covering transport failures, decode
//! failures, and server-side rejections. Field-validation rejections carry
//! the structured error payload so callers can feed it back into form state.

use serde::Deserialize;

use crate::models::GroupErrors;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const STATUS_ERROR: &str = "STATUS_ERROR";
}

/// Client error type.
#[derive(Debug)]
pub enum ApiError {
    /// Network/transport failure (connect, timeout, TLS)
    Transport(String),
    /// Resource not found on the server (404)
    NotFound(String),
    /// Server rejected a submit with per-field validation messages
    Validation(GroupErrors),
    /// Response body could not be decoded
    Decode(String),
    /// Any other non-success HTTP status
    Status { status: u16, message: String },
}

impl ApiError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => codes::TRANSPORT_ERROR,
            ApiError::NotFound(_) => codes::NOT_FOUND,
            ApiError::Validation(_) => codes::VALIDATION_ERROR,
            ApiError::Decode(_) => codes::DECODE_ERROR,
            ApiError::Status { .. } => codes::STATUS_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Validation(_) => "Record rejected by server-side validation".to_string(),
            ApiError::Decode(msg) => msg.clone(),
            ApiError::Status { status, message } => format!("HTTP {}: {}", status, message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        if err.is_decode() {
            ApiError::Decode(format!("Response decode error: {}", err))
        } else {
            ApiError::Transport(format!("Transport error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}

/// Wire shape of a rejected submit: a `{"errors": {...}}` body whose keys
/// align with the form's field names.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub errors: GroupErrors,
}
