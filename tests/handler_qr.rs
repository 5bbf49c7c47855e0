mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use base64::Engine as _;
use kodeqr::api::handlers::generate_qr_handler;
use serde_json::json;
use sqlx::SqlitePool;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";
const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn qr_router(state: kodeqr::AppState) -> Router {
    Router::new()
        .route("/api/generate-qr", post(generate_qr_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_generate_qr_returns_png_data_url(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    let response = server
        .post("/api/generate-qr")
        .json(&json!({ "content": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data_url = json["qr_code_image"].as_str().unwrap();
    assert!(data_url.starts_with(DATA_URL_PREFIX));

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&data_url[DATA_URL_PREFIX.len()..])
        .unwrap();
    assert_eq!(&bytes[..PNG_SIGNATURE.len()], PNG_SIGNATURE);
}

#[sqlx::test]
async fn test_generate_qr_without_logo_warns_but_succeeds(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    // The test state points the composer at a nonexistent logo asset.
    let response = server
        .post("/api/generate-qr")
        .json(&json!({ "content": "plain text works too" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["warning"], "Logo file not found");
    assert!(json["qr_code_image"].as_str().unwrap().starts_with(DATA_URL_PREFIX));
}

#[sqlx::test]
async fn test_generate_qr_missing_content(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    let response = server.post("/api/generate-qr").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "content is required");
}

#[sqlx::test]
async fn test_generate_qr_empty_content(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    let response = server
        .post("/api/generate-qr")
        .json(&json!({ "content": "" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_generate_qr_non_json_body(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    let response = server.post("/api/generate-qr").text("just some text").await;

    assert_eq!(response.status_code(), 415);
}

#[sqlx::test]
async fn test_generate_qr_oversized_content(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(qr_router(state)).unwrap();

    // Exceeds QR capacity even at the largest symbol version.
    let response = server
        .post("/api/generate-qr")
        .json(&json!({ "content": "x".repeat(4000) }))
        .await;

    response.assert_status_bad_request();
}
