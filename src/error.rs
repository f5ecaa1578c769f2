use reqwest::StatusCode;
use thiserror::Error;

/// Custom error types for the weather-report application
#[derive(Error, Debug)]
pub enum AppError {
    /// The endpoint answered with a non-2xx status
    #[error("{status} for url: {url}{}", api_message_suffix(.message))]
    HttpStatus {
        status: StatusCode,
        /// Request URL with the API key redacted
        url: String,
        /// Error message reported by the API body, if it had one
        message: Option<String>,
    },

    /// A field needed for the report is absent from the response
    #[error("Missing field in API response: {0}")]
    MissingField(&'static str),

    /// Connection, timeout or body read failure; the URL is stripped so the
    /// API key cannot leak through the message
    #[error("HTTP request error")]
    Request(#[source] reqwest::Error),

    /// The 2xx body is not the expected JSON document
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(err.without_url())
    }
}

fn api_message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

impl AppError {
    pub fn is_http_status(&self) -> bool {
        matches!(self, AppError::HttpStatus { .. })
    }
}
