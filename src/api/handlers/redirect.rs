//! Handler for the short URL redirect path.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// This is the hot path: one lookup, one atomic click increment, then a
/// `302 Found` with `Location` set to the original URL.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty code or an expired link, 404 Not
/// Found for an unknown code.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(code = %link.short_code, clicks = link.clicks, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
