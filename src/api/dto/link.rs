//! JSON representation of a short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Link payload returned by every endpoint that yields a record.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    /// Display URL, `{base_url}/{short_code}`.
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkResponse {
    /// Builds the response payload, formatting the display URL from the
    /// configured public base.
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.short_code);

        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
            updated_at: link.updated_at,
            expires_at: link.expires_at,
        }
    }
}
