use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Main application error type, one variant per pipeline stage
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing required input; never retried
    InvalidRequest(String),
    /// Source unreachable or non-success response from the blob store
    FetchFailed(String),
    /// Input bytes are not a valid/supported image
    DecodeFailed(String),
    /// Internal encoder error
    EncodeFailed(String),
}

/// Structured error response for the API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidRequest(msg) => format!("Error: {}", msg),
            AppError::FetchFailed(cause) => {
                format!("Failed to fetch source image: {}", cause)
            }
            AppError::DecodeFailed(cause) => {
                format!("Failed to decode source image: {}", cause)
            }
            AppError::EncodeFailed(cause) => {
                format!("Failed to encode converted image: {}", cause)
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::FetchFailed(_) => "FETCH_FAILED",
            AppError::DecodeFailed(_) => "DECODE_FAILED",
            AppError::EncodeFailed(_) => "ENCODE_FAILED",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    // Every stage failure is surfaced to the caller; none is fatal to
    // the process. All four variants map to 400.
    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.user_message(),
        };

        HttpResponse::build(StatusCode::BAD_REQUEST).json(response)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::FetchFailed(format!("request timed out: {}", err))
        } else if let Some(status) = err.status() {
            AppError::FetchFailed(format!("upstream returned {}", status))
        } else {
            AppError::FetchFailed(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
