//! DTO for the link creation endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten. Scheme and host are validated by the
    /// core before a record is created.
    pub url: String,

    /// Optional lifetime in minutes, between one minute and one year.
    /// Absent means the link never expires.
    #[validate(range(min = 1, max = 525600))]
    pub expires_in_minutes: Option<i64>,
}
