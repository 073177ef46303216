//! Redirect target validation.
//!
//! Only absolute `http`/`https` URLs with a non-empty host are accepted as
//! redirect targets. Anything else (including `javascript:`, `data:` and
//! `file:` schemes) is rejected before a link record is created.

use url::Url;

/// Errors produced while validating a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a non-empty host")]
    MissingHost,
}

/// Validates that `input` is an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative
/// URLs, [`UrlValidationError::UnsupportedProtocol`] for any scheme other
/// than `http`/`https`, and [`UrlValidationError::MissingHost`] when the
/// host part is absent or empty.
pub fn validate_redirect_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
