//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and its original URL.
///
/// Records are created exactly once by the shorten service and are never
/// updated or deleted afterwards.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new short URL record.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub long_url: String,
    pub short_code: String,
}
