//! zookeepr: a small file-backed animal registry.
//!
//! - [`animal`]: the record type, query filtering, lookup and candidate validation
//! - [`store`]: the read-all / write-all storage port and its backends
//! - [`service`]: the registry that owns the list, plus the axum transport (`http` feature)

pub mod animal;
pub mod config;
mod error;
pub mod service;
pub mod store;

pub use animal::{filter_by_query, find_by_id, validate, Animal, AnimalQuery, NewAnimal, ValidationError};
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use service::{create_new_animal, AnimalService};
pub use store::{AnimalStore, AnimalsDocument, InMemoryAnimalStore, JsonFileStore, StoreError};
