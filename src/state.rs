//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base for display URLs, carried explicitly from configuration.
    pub base_url: String,
}

impl AppState {
    /// Creates application state from a link service and the configured
    /// public base URL.
    pub fn new(link_service: Arc<LinkService>, base_url: impl Into<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }
}
