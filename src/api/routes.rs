//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, link_info_handler,
    list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    routing::get,
    Router,
};

/// Link management routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`           - Create a short link
/// - `GET    /links`           - List all links (expired included)
/// - `GET    /links/{id}`      - Fetch a link by id
/// - `PATCH  /links/{id}`      - Partially update a link
/// - `DELETE /links/{id}`      - Permanently delete a link
/// - `GET    /resolve/{code}`  - Link metadata without counting a click
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .patch(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/resolve/{code}", get(link_info_handler))
}
