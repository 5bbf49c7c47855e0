//! Short URL creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum code generation attempts before the request fails.
///
/// A collision at 6 characters from a 64-symbol alphabet is astronomically
/// unlikely, so the cap exists to guarantee termination rather than to be
/// reached in practice.
const MAX_ATTEMPTS: usize = 20;

/// Service for creating and resolving shortened URLs.
///
/// No URL-syntax validation is performed here or anywhere else: any
/// non-empty string shortens, including malformed URLs.
pub struct ShortenService<R: ShortUrlRepository> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL record with a freshly generated unique code.
    ///
    /// # Code Generation
    ///
    /// Generates a random 6-character code and checks the store for an
    /// existing record. A collision regenerates, as does a conflict from
    /// the insert itself (a concurrent request claimed the same code
    /// between the availability check and the write). After
    /// [`MAX_ATTEMPTS`] failed rounds the request fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no unique code could be produced
    /// or on database errors.
    pub async fn shorten(&self, long_url: String) -> Result<ShortUrl, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_some() {
                tracing::warn!(attempt, %code, "short code collision, regenerating");
                continue;
            }

            let new_url = NewShortUrl {
                long_url: long_url.clone(),
                short_code: code,
            };

            match self.repository.insert(new_url).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "short code lost an insert race, regenerating");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to generate a unique short code"))
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }
}
