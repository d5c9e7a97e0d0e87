use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Load failed for '{endpoint}': server returned status {status}")]
    LoadFailed { endpoint: String, status: u16 },

    #[error("Write failed for '{endpoint}': server returned status {status}")]
    WriteFailed { endpoint: String, status: u16 },

    #[error("Invalid payload from '{endpoint}': {message}")]
    InvalidPayload { endpoint: String, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Word '{0}' already exists")]
    DuplicateWord(String),

    #[error("Word '{0}' not found")]
    WordNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
