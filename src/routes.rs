//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `GET /health`   - Liveness probe (public)
//! - `GET /{code}`   - Short link redirect (public)
//! - `/api/*`        - Link management REST API
//!
//! All routes share the request tracing middleware.

use axum::routing::get;
use axum::Router;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .layer(api::middleware::tracing::layer())
        .with_state(state)
}
