pub mod error;
pub mod types;

pub use error::{MovieError, Result};
pub use types::{Deleted, Movie, MovieData, MovieId};
