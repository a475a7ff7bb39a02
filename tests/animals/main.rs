//! Animal registry integration tests.
//!
//! - Filtering, lookup and ingestion through `AnimalService`
//! - The JSON file store as the durable backend
//! - The axum transport end to end (requires the `http` feature)

#[cfg(feature = "http")]
mod http;
