#![allow(dead_code)]

use kodeqr::application::services::{QrComposer, ShortenService};
use kodeqr::infrastructure::persistence::SqliteShortUrlRepository;
use kodeqr::state::AppState;
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

/// Builds an [`AppState`] over the given pool. The QR composer is pointed
/// at a nonexistent logo asset, so composition runs in degraded mode.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool)));

    AppState {
        shorten_service: Arc::new(ShortenService::new(repository)),
        qr_composer: Arc::new(QrComposer::new(Path::new("no-such-logo.png"))),
    }
}

pub async fn create_test_short_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO short_urls (long_url, short_code, created_at) \
         VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))",
    )
    .bind(url)
    .bind(code)
    .execute(pool)
    .await
    .unwrap();
}
