//! InMemoryAnimalStore - Vec-backed store for testing and embedding.

use std::sync::{Arc, RwLock};

use super::{AnimalStore, AnimalsDocument, StoreError};
use crate::animal::Animal;

#[derive(Default)]
struct Inner {
    animals: Vec<Animal>,
    /// Rendered form of the last write, as the file store would have it.
    last_document: Option<String>,
    writes: usize,
}

/// In-memory store. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryAnimalStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryAnimalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `animals`.
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                animals,
                ..Inner::default()
            })),
        }
    }

    /// The document produced by the most recent `write_all`, if any.
    pub fn last_document(&self) -> Result<Option<String>, StoreError> {
        self.inner
            .read()
            .map(|inner| inner.last_document.clone())
            .map_err(|_| StoreError::LockPoisoned("last_document"))
    }

    /// Number of completed writes.
    pub fn writes(&self) -> Result<usize, StoreError> {
        self.inner
            .read()
            .map(|inner| inner.writes)
            .map_err(|_| StoreError::LockPoisoned("writes"))
    }
}

impl AnimalStore for InMemoryAnimalStore {
    fn read_all(&self) -> Result<Vec<Animal>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read_all"))?;
        Ok(inner.animals.clone())
    }

    fn write_all(&self, animals: &[Animal]) -> Result<(), StoreError> {
        let document = AnimalsDocument::to_pretty_json(animals)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write_all"))?;
        inner.animals = animals.to_vec();
        inner.last_document = Some(document);
        inner.writes += 1;
        Ok(())
    }
}
