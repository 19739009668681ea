use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GiphyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Response format error: {0}")]
    ResponseFormatError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl From<reqwest::Error> for GiphyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GiphyError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            GiphyError::TransportError("Failed to connect to Giphy".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 | 403 => GiphyError::AuthError("Giphy rejected the API key".to_string()),
                404 => GiphyError::NotFound("External resource not found".to_string()),
                _ => GiphyError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            GiphyError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GiphyError {
    fn from(err: serde_json::Error) -> Self {
        GiphyError::ResponseFormatError(err.to_string())
    }
}

// Result type alias for convenience
pub type GiphyResult<T> = Result<T, GiphyError>;
