use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::DocumentSlot;

/// Failures raised by the REST client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Session expired. Please login again.")]
    SessionExpired,
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Session-ending failures must not be retried by callers.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Rejections raised when a file is picked for a document slot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("{} must be {}", .slot.label(), .slot.accepted_description())]
    WrongType { slot: DocumentSlot },
    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },
    #[error("Unable to read file: {0}")]
    Unreadable(String),
}

/// Unified error type for configuration, storage and API layers.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, IntakeError>;

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}
