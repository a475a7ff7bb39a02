//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::{json, Value};
use zookeepr::service;
use zookeepr::{AnimalService, AnimalStore, InMemoryAnimalStore};

use crate::support::{bo, zoo};

/// Bind to port 0 and return the base URL plus the backing store.
async fn start_server() -> (String, InMemoryAnimalStore) {
    let store = InMemoryAnimalStore::with_animals(zoo());
    let registry = Arc::new(AnimalService::load(store.clone()).unwrap());
    let app = service::router(registry);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), store)
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn health_check() {
    let (base, _) = start_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true, "animals": 4 }));
}

#[tokio::test]
async fn list_without_query_returns_everything() {
    let (base, _) = start_server().await;
    let resp = reqwest::get(format!("{base}/api/animals")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(names(&body), vec!["Erica", "Noel", "Sarah", "Sebastian"]);
}

#[tokio::test]
async fn list_filters_by_name() {
    let (base, _) = start_server().await;
    let body: Value = reqwest::get(format!("{base}/api/animals?name=Erica"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["Erica"]);
    assert_eq!(body[0]["personalityTraits"], json!(["quirky", "rash"]));
}

#[tokio::test]
async fn list_with_repeated_traits_requires_all() {
    let (base, _) = start_server().await;
    let body: Value = reqwest::get(format!(
        "{base}/api/animals?personalityTraits=quirky&personalityTraits=sassy"
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    assert_eq!(names(&body), vec!["Sebastian"]);
}

#[tokio::test]
async fn list_with_no_match_is_empty_array() {
    let (base, _) = start_server().await;
    let resp = reqwest::get(format!("{base}/api/animals?diet=herbivore&species=gorilla"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_by_id() {
    let (base, _) = start_server().await;
    let resp = reqwest::get(format!("{base}/api/animals/1")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Noel");
}

#[tokio::test]
async fn get_missing_returns_404_without_body() {
    let (base, _) = start_server().await;
    let resp = reqwest::get(format!("{base}/api/animals/99")).await.unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_creates_and_persists() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/animals"))
        .json(&bo())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "4");
    assert_eq!(body["name"], "Bo");

    assert_eq!(store.writes().unwrap(), 1);
    assert_eq!(store.read_all().unwrap().len(), 5);

    let fetched: Value = reqwest::get(format!("{base}/api/animals/4"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn post_invalid_returns_400_with_message() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/animals"))
        .json(&json!({ "name": "Bo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("not properly formatted"));
    assert!(message.contains("species"));
    assert_eq!(store.writes().unwrap(), 0);
}

#[tokio::test]
async fn list_with_repeated_empty_trait_matches_nothing() {
    let (base, _) = start_server().await;
    let body: Value = reqwest::get(format!(
        "{base}/api/animals?personalityTraits=quirky&personalityTraits="
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn post_without_json_content_type_returns_400_with_error() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/animals"))
        .body(r#"{"name":"Bo"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("malformed request body"));
    assert_eq!(store.writes().unwrap(), 0);
}

#[tokio::test]
async fn post_malformed_json_returns_400_with_error() {
    let (base, store) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/animals"))
        .header("content-type", "application/json")
        .body("{bad")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert_eq!(store.writes().unwrap(), 0);
}
