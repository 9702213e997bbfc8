use crate::config::{IdStrategy, StoreConfig, UpdatePlacement};
use crate::core::{Deleted, Movie, MovieData, MovieError, MovieId, Result};
use crate::core::types::ID_FIELD;
use tracing::{debug, warn};

/// In-process owner of the movie records
///
/// Records are kept in insertion order and looked up by linear scan.
/// Mutations take `&mut self`; the store does no locking of its own.
#[derive(Debug)]
pub struct MovieStore {
    movies: Vec<Movie>,
    /// Next id handed out under `IdStrategy::Sequential`
    next_id: MovieId,
    last_created: Option<MovieId>,
    config: StoreConfig,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            movies: Vec::new(),
            next_id: 1,
            last_created: None,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// All records, in store order
    pub fn get_all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get_one(&self, id: MovieId) -> Result<&Movie> {
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .ok_or(MovieError::NotFound(id))
    }

    /// Append a record built from `data` and return the new record count.
    ///
    /// The count is returned, not the id; use [`MovieStore::last_created_id`]
    /// to learn which id was assigned.
    pub fn create(&mut self, data: MovieData) -> usize {
        warn_on_caller_id(&data);

        let id = match self.config.id_strategy {
            IdStrategy::Sequential => self.next_id,
            IdStrategy::LengthBased => self.movies.len() as MovieId + 1,
        };
        self.next_id = self.next_id.max(id + 1);

        self.movies.push(Movie::new(id, data));
        self.last_created = Some(id);

        let count = self.movies.len();
        debug!(id, count, strategy = %self.config.id_strategy, "movie created");
        count
    }

    /// Remove every record carrying `id`. Survivors keep their relative order.
    pub fn delete_one(&mut self, id: MovieId) -> Result<Deleted> {
        self.get_one(id)?;

        let before = self.movies.len();
        self.movies.retain(|movie| movie.id != id);

        debug!(id, removed = before - self.movies.len(), "movie deleted");
        Ok(Deleted { id })
    }

    /// Merge `data` into the record with `id`, keeping its id.
    pub fn update(&mut self, id: MovieId, data: MovieData) -> Result<()> {
        warn_on_caller_id(&data);

        match self.config.update_placement {
            UpdatePlacement::InPlace => {
                let movie = self
                    .movies
                    .iter_mut()
                    .find(|movie| movie.id == id)
                    .ok_or(MovieError::NotFound(id))?;
                movie.merge(data);
            }
            UpdatePlacement::MoveToEnd => {
                let mut movie = self.get_one(id)?.clone();
                self.delete_one(id)?;
                movie.merge(data);
                self.movies.push(movie);
            }
        }

        debug!(id, placement = %self.config.update_placement, "movie updated");
        Ok(())
    }

    /// Id assigned by the most recent `create`
    pub fn last_created_id(&self) -> Option<MovieId> {
        self.last_created
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_on_caller_id(data: &MovieData) {
    if let Some(value) = data.get(ID_FIELD) {
        warn!(supplied = %value, "ignoring caller-supplied movie id");
    }
}
