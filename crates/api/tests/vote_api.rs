//! HTTP-level integration tests for votes: creation rules, listing and the
//! recent-votes window.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, create_restaurant, get, merge, post_json, restaurant_body, vote_body};
use lunchpick_core::store::LunchStore;
use lunchpick_core::vote::NewVote;
use lunchpick_db::MemoryStore;
use serde_json::json;
use uuid::Uuid;

async fn post_vote(
    store: &Arc<MemoryStore>,
    restaurant_id: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = post_json(
        build_test_app(store.clone()),
        &format!("/api/v1/restaurants/{restaurant_id}/votes"),
        body,
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn restaurant_json(store: &Arc<MemoryStore>, restaurant_id: &str) -> serde_json::Value {
    let response = get(
        build_test_app(store.clone()),
        &format!("/api/v1/restaurants/{restaurant_id}"),
    )
    .await;
    body_json(response).await
}

async fn vote_count(store: &Arc<MemoryStore>, restaurant_id: &str) -> i64 {
    restaurant_json(store, restaurant_id).await["data"]["vote_count"]
        .as_i64()
        .unwrap()
}

fn stored_vote(restaurant_id: Uuid, user: &str) -> NewVote {
    NewVote {
        restaurant_id,
        user_name: user.to_string(),
        score_overall: 3,
        score_food: 3,
        score_quantity: 3,
        score_price: 3,
        score_ambience: 3,
        comment: None,
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_vote_returns_201_and_updates_stats() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;

    let (status, json) = post_vote(
        &store,
        &id,
        merge(vote_body("  ana  ", 4), json!({"comment": "Great tortilla"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["user_name"], "ana");
    assert_eq!(json["data"]["score_overall"], 4);
    assert_eq!(json["data"]["comment"], "Great tortilla");
    assert_eq!(json["data"]["restaurant_id"], id.as_str());

    let stats = restaurant_json(&store, &id).await;
    assert_eq!(stats["data"]["vote_count"], 1);
    assert_eq!(stats["data"]["avg_score"], 4.0);

    let (status, _) = post_vote(&store, &id, vote_body("luis", 1)).await;
    assert_eq!(status, StatusCode::CREATED);

    let stats = restaurant_json(&store, &id).await;
    assert_eq!(stats["data"]["vote_count"], 2);
    assert_eq!(stats["data"]["avg_score"], 2.5);
    assert!(stats["data"]["last_visit"].is_string());
}

#[tokio::test]
async fn second_vote_same_day_returns_409() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;

    let (first, _) = post_vote(&store, &id, vote_body("ana", 4)).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, json) = post_vote(&store, &id, vote_body("ana", 5)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATE_VOTE");
    assert_eq!(vote_count(&store, &id).await, 1);
}

#[tokio::test]
async fn same_user_may_vote_for_different_restaurants() {
    let store = Arc::new(MemoryStore::new());
    let a = create_restaurant(&store, restaurant_body("A")).await;
    let b = create_restaurant(&store, restaurant_body("B")).await;

    let (first, _) = post_vote(&store, &a, vote_body("ana", 4)).await;
    let (second, _) = post_vote(&store, &b, vote_body("ana", 4)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
}

#[tokio::test]
async fn out_of_range_scores_return_400_without_write() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;

    for body in [
        vote_body("ana", 6),
        merge(vote_body("ana", 4), json!({"score_food": 0})),
        merge(vote_body("ana", 4), json!({"score_ambience": -1})),
    ] {
        let (status, json) = post_vote(&store, &id, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_SCORE");
    }
    assert_eq!(vote_count(&store, &id).await, 0);
}

#[tokio::test]
async fn blank_user_name_returns_400() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;

    let (status, json) = post_vote(&store, &id, vote_body("   ", 4)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn vote_for_unknown_restaurant_returns_404() {
    let store = Arc::new(MemoryStore::new());

    let (status, json) = post_vote(&store, &Uuid::new_v4().to_string(), vote_body("ana", 4)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn restaurant_votes_listed_newest_first() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;
    let uuid: Uuid = id.parse().unwrap();
    let now = Utc::now();
    store
        .insert_vote(&stored_vote(uuid, "old"), now - Duration::days(5))
        .await
        .unwrap();
    store
        .insert_vote(&stored_vote(uuid, "new"), now - Duration::days(1))
        .await
        .unwrap();

    let response = get(
        build_test_app(store.clone()),
        &format!("/api/v1/restaurants/{id}/votes"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["user_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(users, vec!["new", "old"]);
}

#[tokio::test]
async fn votes_of_unknown_restaurant_return_404() {
    let store = Arc::new(MemoryStore::new());
    let response = get(
        build_test_app(store),
        &format!("/api/v1/restaurants/{}/votes", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recent_votes_respect_days_window() {
    let store = Arc::new(MemoryStore::new());
    let id = create_restaurant(&store, restaurant_body("Casa Pepe")).await;
    let uuid: Uuid = id.parse().unwrap();
    let now = Utc::now();
    store
        .insert_vote(&stored_vote(uuid, "three-days"), now - Duration::days(3))
        .await
        .unwrap();
    store
        .insert_vote(&stored_vote(uuid, "ten-days"), now - Duration::days(10))
        .await
        .unwrap();
    store
        .insert_vote(&stored_vote(uuid, "forty-days"), now - Duration::days(40))
        .await
        .unwrap();

    let count = |json: serde_json::Value| json["data"].as_array().unwrap().len();

    let week = get(build_test_app(store.clone()), "/api/v1/votes/recent?days=7").await;
    assert_eq!(week.status(), StatusCode::OK);
    assert_eq!(count(body_json(week).await), 1);

    let default = get(build_test_app(store.clone()), "/api/v1/votes/recent").await;
    assert_eq!(count(body_json(default).await), 2);

    let clamped = get(build_test_app(store.clone()), "/api/v1/votes/recent?days=0").await;
    assert_eq!(count(body_json(clamped).await), 0);
}

#[tokio::test]
async fn malformed_days_returns_400() {
    let store = Arc::new(MemoryStore::new());
    let response = get(build_test_app(store), "/api/v1/votes/recent?days=week").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
