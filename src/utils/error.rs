use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoQError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service description unavailable at {url}: {message}")]
    ServiceDescription { url: String, message: String },

    #[error("Remote fault in {operation} (HTTP {status}): {message}")]
    RemoteFault {
        operation: String,
        status: u16,
        message: String,
    },

    #[error("Invalid response from {operation}: {message}")]
    InvalidResponse { operation: String, message: String },

    #[error("Operation '{operation}' is not declared by the {family} service")]
    UnknownOperation { family: String, operation: String },

    #[error("Key not found: '{key}'. Valid keys are: {valid}")]
    KeyNotFound { key: String, valid: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MemoQError {
    /// 本地驗證錯誤（不涉及網路）
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            MemoQError::UnknownOperation { .. }
                | MemoQError::KeyNotFound { .. }
                | MemoQError::ConfigValidationError { .. }
                | MemoQError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MemoQError>;
