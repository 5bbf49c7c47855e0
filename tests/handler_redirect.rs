mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use kodeqr::api::handlers::{redirect_handler, shorten_handler};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::create_test_short_url(&pool, "Ab3xYz", "https://example.com/target").await;

    let response = server.get("/Ab3xYz").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");
}

#[sqlx::test]
async fn test_redirect_unrepresentable_location_is_opaque_500(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    // Shorten accepts arbitrary strings; ones that cannot become a Location
    // header must fail with an opaque message rather than a panic.
    common::create_test_short_url(&pool, "broken", "https://example.com/\nevil").await;

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "Internal server error");
}

#[sqlx::test]
async fn test_shorten_then_redirect_round_trip(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Host", "localhost:5001")
        .json(&json!({ "long_url": "https://example.com/round-trip" }))
        .await;

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/round-trip");
}
