//! Service: the animal registry and its HTTP transport.
//!
//! `AnimalService<S>` owns the in-memory animal list and the store it was
//! loaded from. Handlers share it behind an `Arc`; every operation takes
//! the service explicitly rather than reaching for global state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zookeepr::animal::AnimalQuery;
//! use zookeepr::service::AnimalService;
//! use zookeepr::store::InMemoryAnimalStore;
//! use serde_json::json;
//!
//! let service = AnimalService::load(InMemoryAnimalStore::new())?;
//! let created = service.create(&json!({
//!     "name": "Bo",
//!     "species": "dog",
//!     "diet": "omnivore",
//!     "personalityTraits": ["loyal"]
//! }))?;
//! assert_eq!(created.id, "0");
//!
//! let dogs = service.list(&AnimalQuery::new().with_species("dog"))?;
//! ```

mod animal_service;
#[cfg(feature = "http")]
mod http;

pub use animal_service::{create_new_animal, AnimalService};
#[cfg(feature = "http")]
pub use http::{router, serve};
