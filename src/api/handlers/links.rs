//! Handlers for link management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::domain::entities::ShortLinkPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "expires_in_minutes": 60   // optional, 1..=525600
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is not an absolute http(s) URL or
/// the expiry is out of range.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(payload.url, payload.expires_in_minutes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Lists every link, expired ones included.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.find_all().await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &state.base_url))
            .collect(),
    ))
}

/// Fetches a single link by id.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no link has this id. Expired links are
/// still returned; expiry only gates resolution.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.find_by_id(id).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}`
///
/// Only `url` and `expires_at` can change; the short code is immutable and
/// the click counter moves only through the redirect path.
///
/// # Errors
///
/// Returns 404 Not Found when no link has this id, 400 Bad Request when
/// the replacement URL is invalid.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let patch = ShortLinkPatch {
        original_url: payload.url,
        expires_at: payload.expires_at,
    };

    let link = state.link_service.update(id, patch).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no link has this id.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Read-only metadata peek for a short code.
///
/// # Endpoint
///
/// `GET /api/resolve/{code}`
///
/// Same validation and expiry semantics as the redirect path, but never
/// increments the click counter and never writes.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty code or an expired link, 404 Not
/// Found for an unknown code.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.resolve_info(&code).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}
