use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Could not connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("An error occurred during the request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error occurred: {status} {body}")]
    HttpStatus { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Config,
    Processing,
}

impl TodoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TodoError::Timeout { .. } | TodoError::Connection { .. } | TodoError::Request { .. } => {
                ErrorCategory::Network
            }
            TodoError::HttpStatus { .. } => ErrorCategory::Http,
            TodoError::ConfigError { .. } | TodoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            TodoError::IoError(_)
            | TodoError::SerializationError(_)
            | TodoError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    /// True when the failure happened while talking to the remote source.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Network | ErrorCategory::Http)
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
