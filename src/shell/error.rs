use crate::core::MovieError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Store(#[from] MovieError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
