// ============================================================================
// MovieStore Library
// ============================================================================

pub mod config;
pub mod core;
pub mod shell;
pub mod storage;

// Re-export main types for convenience
pub use config::{IdStrategy, StoreConfig, UpdatePlacement};
pub use core::{Deleted, Movie, MovieData, MovieError, MovieId, Result};
pub use storage::MovieStore;

/// Convenience: build the attribute map for a movie from any JSON object
///
/// Returns `None` when `value` is not an object.
///
/// # Examples
///
/// ```
/// use moviestore::{MovieStore, movie_data};
/// use serde_json::json;
///
/// let mut store = MovieStore::new();
/// let count = store.create(movie_data(json!({"title": "Alien", "year": 1979})).unwrap());
/// assert_eq!(count, 1);
/// assert_eq!(store.get_one(1).unwrap().title(), Some("Alien"));
/// ```
pub fn movie_data(value: serde_json::Value) -> Option<MovieData> {
    match value {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}
