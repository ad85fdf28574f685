use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl AppError {
    /// Transport and decoding problems are reported to the view as one kind.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::HttpError(_) | AppError::JsonError(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::IoError(e.to_string())
    }
}
