use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordSearchError>;

#[derive(Debug, Error)]
pub enum WordSearchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("board must hold a non-empty perfect square of tiles, got {len}")]
    InvalidShape { len: usize },

    #[error("lexicon has not been loaded")]
    NotLoaded,

    #[error("lexicon source '{source_name}' is unavailable")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl WordSearchError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WordSearchError::InvalidInput(message.into())
    }
}
