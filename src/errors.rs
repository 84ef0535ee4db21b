use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("date index {index} is out of range (training dates: {len})")]
    DateIndexOutOfRange { index: usize, len: usize },
    #[error("training date {0} already exists")]
    DuplicateDate(NaiveDate),
    #[error("player {0} not found")]
    PlayerNotFound(u32),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("not signed in")]
    NotSignedIn,
    #[error("no remote document found")]
    DocumentNotFound,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("authorization denied: {0}")]
    AuthorizationDenied(String),
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("{0}")]
    Msg(String),
    #[error("serialization error")]
    SerializationError,
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Msg(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            IOError::EncodingError(e.to_string())
        } else {
            IOError::SerializationError
        }
    }
}

impl From<csv::Error> for IOError {
    fn from(e: csv::Error) -> Self {
        IOError::Msg(format!("csv error: {}", e))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        SyncError::Transport(e.to_string())
    }
}
