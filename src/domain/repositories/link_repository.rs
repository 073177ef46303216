//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short links.
///
/// Each method is a single storage operation; no cross-call atomicity is
/// assumed. Uniqueness of `short_code` is backed by a storage-level unique
/// constraint, so a concurrent creation that slips past the pre-insert
/// existence check still surfaces as [`AppError::Conflict`] at write time.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory,
///   used by the integration tests
/// - Mocks auto-generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists every stored link, expired ones included, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Inserts a new link, assigning id, `clicks = 0` and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the short code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Persists the mutable fields of an existing link and refreshes
    /// `updated_at`.
    ///
    /// Only `original_url` and `expires_at` are written; `short_code`,
    /// `clicks` and `created_at` are never touched by this method.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the record no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, link: ShortLink) -> Result<ShortLink, AppError>;

    /// Permanently deletes a link by id.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if no record
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the click counter of the link with this code
    /// and refreshes `updated_at`, returning the updated record.
    ///
    /// The increment happens in a single storage operation so concurrent
    /// resolutions never lose an update. Returns `Ok(None)` when no record
    /// matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<ShortLink>, AppError>;
}
