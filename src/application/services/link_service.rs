//! Short link lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{NewShortLink, ShortLink, ShortLinkPatch};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    self, CODE_LENGTH, FALLBACK_CODE_LENGTH,
};
use crate::utils::expiry;
use crate::utils::url_validator::validate_redirect_url;

/// Collision retry budget for code allocation.
const MAX_ATTEMPTS: usize = 10;

/// Service orchestrating the create/resolve/update/delete lifecycle of
/// short links.
///
/// Composes the pure code generator and expiration policy with the storage
/// repository. The service itself holds no mutable state; all state lives
/// behind the repository.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service over the given repository.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL must be an absolute `http`/`https` URL with a non-empty
    /// host. When `expires_in_minutes` is present the link expires that
    /// many minutes after creation; otherwise it never expires.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL and
    /// [`AppError::Internal`] on storage failures.
    pub async fn create(
        &self,
        original_url: String,
        expires_in_minutes: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        validate_redirect_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let expires_at = expiry::compute_expiry(Utc::now(), expires_in_minutes);

        self.allocate_and_insert(original_url, expires_at).await
    }

    /// Lists every link, expired ones included.
    ///
    /// Expiration is a resolution-time concern, not a listing concern.
    pub async fn find_all(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository.find_all().await
    }

    /// Fetches a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record has this id.
    pub async fn find_by_id(&self, id: i64) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Resolves a short code for redirecting, counting the click.
    ///
    /// The click counter is incremented atomically at the storage layer,
    /// so concurrent resolutions of the same code never lose an update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or whitespace-only
    /// code, [`AppError::NotFound`] when no record matches, and
    /// [`AppError::Expired`] when the link is past its validity window.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let link = self.lookup_valid(code).await?;

        self.repository
            .increment_clicks(&link.short_code)
            .await?
            .ok_or_else(|| {
                // Deleted between the lookup and the increment.
                AppError::not_found(
                    "Short link not found",
                    json!({ "code": link.short_code }),
                )
            })
    }

    /// Read-only variant of [`Self::resolve`] for metadata display.
    ///
    /// Identical validation and expiry semantics, but never increments the
    /// click counter and never writes.
    pub async fn resolve_info(&self, code: &str) -> Result<ShortLink, AppError> {
        self.lookup_valid(code).await
    }

    /// Applies a partial update to the link with this id.
    ///
    /// Only `original_url` and `expires_at` can change; the short code is
    /// immutable after creation and `clicks` moves only through
    /// [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is absent and
    /// [`AppError::Validation`] when the replacement URL is invalid.
    pub async fn update(&self, id: i64, patch: ShortLinkPatch) -> Result<ShortLink, AppError> {
        let mut link = self.find_by_id(id).await?;

        if let Some(url) = patch.original_url {
            validate_redirect_url(&url).map_err(|e| {
                AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
            })?;
            link.original_url = url;
        }

        if let Some(expires_at) = patch.expires_at {
            link.expires_at = expires_at;
        }

        self.repository.save(link).await
    }

    /// Permanently deletes the link with this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is absent.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Allocates a unique short code and inserts the record.
    ///
    /// Each attempt draws a fresh random 6-symbol candidate, checks it
    /// against the store, and inserts. A write-time unique violation counts
    /// as a collision too, so losing the check-then-insert race to a
    /// concurrent create just consumes an attempt. Once the budget is
    /// exhausted, falls back to an 8-symbol hash-derived code seeded with
    /// fresh entropy and inserts it without another existence check; at
    /// that length a repeat collision is treated as negligible.
    async fn allocate_and_insert(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let code = code_generator::random_code(CODE_LENGTH);

            if self.repository.find_by_code(&code).await?.is_some() {
                debug!(attempt, code = %code, "candidate code already taken");
                continue;
            }

            let new_link = NewShortLink {
                original_url: original_url.clone(),
                short_code: code,
                expires_at,
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "lost code allocation race at write time");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        let salt: u64 = rand::rng().random();
        let code = code_generator::derived_code(&original_url, salt, FALLBACK_CODE_LENGTH);
        warn!(code = %code, "collision budget exhausted, using longer fallback code");

        self.repository
            .insert(NewShortLink {
                original_url,
                short_code: code,
                expires_at,
            })
            .await
    }

    /// Shared lookup for the resolution paths: trims and rejects empty
    /// codes, loads the record, and re-checks expiry against the current
    /// clock.
    async fn lookup_valid(&self, code: &str) -> Result<ShortLink, AppError> {
        let code = code.trim();

        if code.is_empty() {
            return Err(AppError::bad_request(
                "Short code cannot be empty",
                json!({}),
            ));
        }

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        if expiry::is_expired(link.expires_at, Utc::now()) {
            return Err(AppError::expired(
                "Short link has expired",
                json!({ "code": code, "expires_at": link.expires_at }),
            ));
        }

        Ok(link)
    }
}
