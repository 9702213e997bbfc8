use super::MovieId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Seed error: {0}")]
    Seed(String),
}

pub type Result<T> = std::result::Result<T, MovieError>;

impl MovieError {
    /// Id carried by a `NotFound` error.
    pub fn missing_id(&self) -> Option<MovieId> {
        match self {
            Self::NotFound(id) => Some(*id),
            _ => None,
        }
    }
}
