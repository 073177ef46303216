//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// `id` and `short_code` are immutable once the record is created. `clicks`
/// only ever increases, and only through the click-counting resolution path.
/// An expired record is never deleted automatically; it stays addressable by
/// id for administrative operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Input data for creating a new short link.
///
/// `id`, `clicks` and the timestamps are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing short link.
///
/// `None` fields are left unchanged. For `expires_at`,
/// `Some(None)` clears the expiry and `Some(Some(t))` sets it.
/// The short code cannot be changed after creation.
#[derive(Debug, Clone, Default)]
pub struct ShortLinkPatch {
    pub original_url: Option<String>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}
