//! Storage port for the animal list.
//!
//! The registry only ever reads the whole list (once, at startup) and writes
//! the whole list (after every ingestion). Backends implement those two
//! operations against whatever durable medium they wrap.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "animals": [
//!     { "id": "0", "name": "...", "species": "...", "diet": "...", "personalityTraits": [] }
//!   ]
//! }
//! ```

mod in_memory;
mod json_file;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animal::Animal;

pub use in_memory::InMemoryAnimalStore;
pub use json_file::JsonFileStore;

/// Read-all / write-all storage for animals.
pub trait AnimalStore: Send + Sync {
    /// Load the full ordered list.
    fn read_all(&self) -> Result<Vec<Animal>, StoreError>;

    /// Replace the stored list with `animals`. Must not return before the
    /// write has completed.
    fn write_all(&self, animals: &[Animal]) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// The on-disk shape of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalsDocument {
    pub animals: Vec<Animal>,
}

impl AnimalsDocument {
    /// Render the document with two-space indentation.
    pub fn to_pretty_json(animals: &[Animal]) -> Result<String, StoreError> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            animals: &'a [Animal],
        }
        Ok(serde_json::to_string_pretty(&Borrowed { animals })?)
    }
}
