//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single-table short URL store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Persists a new short URL record.
    ///
    /// The store enforces `short_code` uniqueness even though the generator
    /// pre-checks availability: with two concurrent requests drawing the
    /// same code, exactly one insert succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;
}
