#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lunchpick_db::MemoryStore;
use tower::ServiceExt;

use lunchpick_api::config::ServerConfig;
use lunchpick_api::router::build_app_router;
use lunchpick_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given in-memory store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. Pass a clone of the same `Arc` to share data between
/// requests.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid restaurant payload; override fields with `merge`.
pub fn restaurant_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "address": "Calle Mayor 1",
        "price_level": "medium",
        "distance_minutes": 10,
        "cuisine_type": "Mediterranean",
        "speed": "normal",
    })
}

/// Shallow-merge `overrides` into `base`.
pub fn merge(mut base: serde_json::Value, overrides: serde_json::Value) -> serde_json::Value {
    if let (Some(target), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    base
}

/// A valid vote payload with every score set to `score`.
pub fn vote_body(user_name: &str, score: i64) -> serde_json::Value {
    serde_json::json!({
        "user_name": user_name,
        "score_overall": score,
        "score_food": score,
        "score_quantity": score,
        "score_price": score,
        "score_ambience": score,
    })
}

/// Create a restaurant over HTTP and return its id.
pub async fn create_restaurant(store: &Arc<MemoryStore>, body: serde_json::Value) -> String {
    let response = post_json(build_test_app(store.clone()), "/api/v1/restaurants", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}
