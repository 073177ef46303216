#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use shortly::application::services::LinkService;
use shortly::infrastructure::persistence::MemoryLinkRepository;
use shortly::routes::app_router;
use shortly::state::AppState;

pub const BASE_URL: &str = "http://short.ly";

/// Spins up a test server over a fresh in-memory repository.
pub fn test_server() -> TestServer {
    test_server_with_repo(Arc::new(MemoryLinkRepository::new()))
}

/// Spins up a test server over a caller-provided repository, so tests can
/// seed records directly (e.g. already-expired links).
pub fn test_server_with_repo(repository: Arc<MemoryLinkRepository>) -> TestServer {
    let link_service = Arc::new(LinkService::new(repository));
    let state = AppState::new(link_service, BASE_URL);

    TestServer::new(app_router(state)).expect("failed to start test server")
}
