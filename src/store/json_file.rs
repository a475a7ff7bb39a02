//! JsonFileStore - the animal list as a single JSON document on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::{AnimalStore, AnimalsDocument, StoreError};
use crate::animal::Animal;

/// File-backed store. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnimalStore for JsonFileStore {
    fn read_all(&self) -> Result<Vec<Animal>, StoreError> {
        let bytes = fs::read(&self.path)?;
        let document: AnimalsDocument = serde_json::from_slice(&bytes)?;
        Ok(document.animals)
    }

    fn write_all(&self, animals: &[Animal]) -> Result<(), StoreError> {
        let json = AnimalsDocument::to_pretty_json(animals)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = animals.len(), "animals written");
        Ok(())
    }
}
