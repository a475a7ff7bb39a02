//! Animals - the record type served by the registry.
//!
//! An `Animal` is an identified record with a few categorical fields and an
//! ordered list of personality traits. Records are append-only: once an id
//! is assigned it never changes and is never reused.
//!
//! ## Example
//!
//! ```ignore
//! use zookeepr::animal::{filter_by_query, find_by_id, AnimalQuery};
//!
//! let query = AnimalQuery::new().with_trait("calm").with_diet("herbivore");
//! let calm_herbivores = filter_by_query(&query, &animals);
//! let first = find_by_id("0", &animals);
//! ```

mod candidate;
mod query;

use serde::{Deserialize, Serialize};

pub use candidate::{validate, NewAnimal, ValidationError};
pub use query::{filter_by_query, AnimalQuery};

/// A stored animal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    /// Stored as strings; see [`NewAnimal::personality_traits`] for how
    /// non-string members of a submitted array are held.
    pub personality_traits: Vec<String>,
}

impl Animal {
    /// Attach an id to a validated candidate.
    pub fn from_candidate(id: impl Into<String>, candidate: NewAnimal) -> Self {
        Self {
            id: id.into(),
            name: candidate.name,
            species: candidate.species,
            diet: candidate.diet,
            personality_traits: candidate.personality_traits,
        }
    }

    /// Whether this animal lists `trait_name` among its personality traits.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}

/// Return the first animal, in list order, whose id equals `id`.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}
