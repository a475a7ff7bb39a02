//! AnimalService - owns the animal list and the store behind it.

use std::sync::RwLock;

use serde_json::Value;

use crate::animal::{filter_by_query, find_by_id, Animal, AnimalQuery, NewAnimal};
use crate::error::ApiError;
use crate::store::{AnimalStore, StoreError};

/// Append a validated candidate to `animals` and persist the full list.
///
/// The id is the list length before the append. The append happens before
/// the write, so a failed write leaves `animals` one record ahead of the
/// store; the error is returned as-is.
pub fn create_new_animal<S: AnimalStore + ?Sized>(
    candidate: NewAnimal,
    animals: &mut Vec<Animal>,
    store: &S,
) -> Result<Animal, StoreError> {
    let animal = Animal::from_candidate(animals.len().to_string(), candidate);
    animals.push(animal.clone());
    store.write_all(animals)?;
    Ok(animal)
}

/// The animal registry.
///
/// Generic over `S`, the store. The list is loaded once from the store and
/// afterwards only changes through [`AnimalService::create`].
pub struct AnimalService<S> {
    store: S,
    animals: RwLock<Vec<Animal>>,
}

impl<S: AnimalStore> AnimalService<S> {
    /// Load the full list from `store`.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let animals = store.read_all()?;
        tracing::info!(count = animals.len(), "animals loaded");
        Ok(Self::with_animals(store, animals))
    }

    /// Build a service over an already loaded list.
    pub fn with_animals(store: S, animals: Vec<Animal>) -> Self {
        Self {
            store,
            animals: RwLock::new(animals),
        }
    }

    /// Animals matching `query`, in insertion order.
    pub fn list(&self, query: &AnimalQuery) -> Result<Vec<Animal>, ApiError> {
        let animals = self
            .animals
            .read()
            .map_err(|_| ApiError::LockPoisoned("list"))?;
        Ok(filter_by_query(query, &animals))
    }

    /// The animal with `id`, if any.
    pub fn get(&self, id: &str) -> Result<Option<Animal>, ApiError> {
        let animals = self
            .animals
            .read()
            .map_err(|_| ApiError::LockPoisoned("get"))?;
        Ok(find_by_id(id, &animals).cloned())
    }

    /// Validate `input` and store it as a new animal.
    ///
    /// The write lock is held across the store write so the assigned id and
    /// the persisted list agree.
    pub fn create(&self, input: &Value) -> Result<Animal, ApiError> {
        let candidate = NewAnimal::try_from(input).map_err(|e| {
            tracing::warn!(reason = %e, "animal rejected");
            ApiError::from(e)
        })?;

        let mut animals = self
            .animals
            .write()
            .map_err(|_| ApiError::LockPoisoned("create"))?;

        match create_new_animal(candidate, &mut animals, &self.store) {
            Ok(animal) => {
                tracing::info!(id = %animal.id, name = %animal.name, "animal created");
                Ok(animal)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to persist animals");
                Err(e.into())
            }
        }
    }

    /// Number of animals currently held.
    pub fn len(&self) -> Result<usize, ApiError> {
        self.animals
            .read()
            .map(|animals| animals.len())
            .map_err(|_| ApiError::LockPoisoned("len"))
    }

    /// True when no animals are held.
    pub fn is_empty(&self) -> Result<bool, ApiError> {
        self.len().map(|n| n == 0)
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
