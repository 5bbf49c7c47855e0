//! Shared application state injected into request handlers.
//!
//! Services are constructed once at startup and passed explicitly; handlers
//! hold no global state.

use std::sync::Arc;

use crate::application::services::{QrComposer, ShortenService};
use crate::infrastructure::persistence::SqliteShortUrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteShortUrlRepository>>,
    pub qr_composer: Arc<QrComposer>,
}
