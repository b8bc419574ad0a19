mod common;

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};

use common::spawn_app;
use hopline::domain::entities::Link;

#[tokio::test]
async fn test_stats_reports_link_fields_and_cache_state() {
    let app = spawn_app();

    app.server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/page" }))
        .await;

    let response = app.server.get("/api/stats/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["short_code"], "1");
    assert_eq!(body["short_url"], format!("{}/1", common::BASE_URL));
    assert_eq!(body["long_url"], "https://example.com/page");
    assert_eq!(body["click_count"], 0);
    // Creation wrote through to the cache.
    assert_eq!(body["is_cached"], true);
}

#[tokio::test]
async fn test_stats_is_cached_false_after_eviction() {
    let app = spawn_app();

    app.store.insert_link(Link::new(
        3,
        "warm".to_string(),
        "https://example.com/warm".to_string(),
        5,
        None,
        Utc::now() - TimeDelta::hours(2),
    ));

    let response = app.server.get("/api/stats/warm").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["click_count"], 5);
    assert_eq!(body["is_cached"], false);
}

#[tokio::test]
async fn test_stats_unknown_code_returns_404() {
    let app = spawn_app();

    let response = app.server.get("/api/stats/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}
