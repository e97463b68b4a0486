//! MovieStore - the in-memory collection of movie records.
//!
//! An ordered `Vec` behind an `RwLock`, clone-friendly via `Arc`. Iteration
//! order is insertion order and carries no meaning. Lookups are linear scans;
//! the collection is small by design and has no index.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::movie::Movie;

/// Store-level failure. The only way an in-memory operation can fail is a
/// poisoned lock, which means a handler panicked mid-mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory movie collection.
#[derive(Clone)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with the given records.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    /// The full collection, in insertion order.
    pub fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(movies.clone())
    }

    /// Movies whose genre set contains a case-insensitive match for `genre`.
    pub fn list_by_genre(&self, genre: &str) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("list_by_genre"))?;
        Ok(movies.iter().filter(|m| m.has_genre(genre)).cloned().collect())
    }

    /// Look up one movie by id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_by_id"))?;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    /// Add a movie at the end of the collection.
    pub fn append(&self, movie: Movie) -> Result<(), StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("append"))?;
        movies.push(movie);
        Ok(())
    }

    /// Overwrite the record at the matching id's position.
    ///
    /// Returns false (and changes nothing) when no record matches.
    pub fn replace(&self, id: &str, updated: Movie) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("replace"))?;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies[index] = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the matching id.
    ///
    /// Returns true if a record was removed, false if the id was absent.
    pub fn remove_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove_by_id"))?;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
