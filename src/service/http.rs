//! HTTP transport for the animal registry.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/animals`: list animals; query keys `personalityTraits`
//!   (repeatable), `diet`, `species`, `name` narrow the result.
//! - `GET /api/animals/:id`: one animal, or 404 with an empty body.
//! - `POST /api/animals`: validate and store the JSON body as a new animal;
//!   any rejected body is a 400 `{ "error": ... }`.
//! - `GET /health`: `{ "ok": true, "animals": n }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use zookeepr::service::{self, AnimalService};
//! use zookeepr::store::JsonFileStore;
//!
//! let service = Arc::new(AnimalService::load(JsonFileStore::new("data/animals.json"))?);
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(service.clone());
//!
//! // Or serve directly
//! service::serve(service, "0.0.0.0:3001").await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::AnimalService;
use crate::animal::AnimalQuery;
use crate::error::ApiError;
use crate::store::AnimalStore;

/// Build an axum `Router` serving the given registry.
pub fn router<S: AnimalStore + 'static>(service: Arc<AnimalService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/animals", get(list_handler).post(create_handler))
        .route("/api/animals/:id", get(get_handler))
        .with_state(service)
}

/// Serve the registry over HTTP at the given address (e.g. `"0.0.0.0:3001"`).
pub async fn serve<S: AnimalStore + 'static>(
    service: Arc<AnimalService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "API server listening");
    axum::serve(listener, app).await
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            // Absence is an ordinary outcome: status only.
            ApiError::NotFound(_) => status.into_response(),
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

/// `GET /health`
async fn health_handler<S: AnimalStore + 'static>(
    State(service): State<Arc<AnimalService<S>>>,
) -> Result<Json<Value>, ApiError> {
    let count = service.len()?;
    Ok(Json(json!({ "ok": true, "animals": count })))
}

/// `GET /api/animals`
async fn list_handler<S: AnimalStore + 'static>(
    State(service): State<Arc<AnimalService<S>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let query = AnimalQuery::from_pairs(pairs);
    Ok(Json(service.list(&query)?))
}

/// `GET /api/animals/:id`
async fn get_handler<S: AnimalStore + 'static>(
    State(service): State<Arc<AnimalService<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let animal = service.get(&id)?.ok_or(ApiError::NotFound(id))?;
    Ok(Json(animal))
}

/// `POST /api/animals`
///
/// A body the JSON extractor refuses (wrong content type, unparsable JSON)
/// is a 400 with the usual error body, same as a failed validation.
async fn create_handler<S: AnimalStore + 'static>(
    State(service): State<Arc<AnimalService<S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "animal body rejected");
        ApiError::MalformedBody(rejection.body_text())
    })?;
    Ok(Json(service.create(&input)?))
}
