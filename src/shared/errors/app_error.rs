use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// User-facing classification of a failed fetch.
///
/// Parse failures are reported as API failures: the user can't act on the
/// difference between a bad status and a malformed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchErrorKind {
    Config,
    Network,
    Api,
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            AppError::ConfigError(_) => FetchErrorKind::Config,
            AppError::NetworkError(_) => FetchErrorKind::Network,
            AppError::ApiError(_) | AppError::ParseError(_) => FetchErrorKind::Api,
            AppError::NotFound(_) => FetchErrorKind::NotFound,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, AppError::ConfigError(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkError("Failed to connect to external service".to_string())
        } else if err.is_decode() {
            AppError::ParseError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("External resource not found".to_string()),
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
