//! In-memory implementation of the link repository.
//!
//! Backs the integration test suite and doubles as a zero-dependency
//! storage backend. A single mutex guards the whole map because both
//! invariants the store enforces (sequential id assignment and short code
//! uniqueness) span the entire key space.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

struct MemoryState {
    next_id: i64,
    links: HashMap<i64, ShortLink>,
}

/// In-memory repository keyed by link id.
pub struct MemoryLinkRepository {
    state: Mutex<MemoryState>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                links: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock only means another test thread panicked while
        // holding it; the map itself is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        Ok(self.lock().links.get(&id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .lock()
            .links
            .values()
            .find(|link| link.short_code == code)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let mut links: Vec<ShortLink> = self.lock().links.values().cloned().collect();
        links.sort_by_key(|link| link.id);
        Ok(links)
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut state = self.lock();

        if state
            .links
            .values()
            .any(|link| link.short_code == new_link.short_code)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "short_code": new_link.short_code }),
            ));
        }

        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let link = ShortLink {
            id,
            original_url: new_link.original_url,
            short_code: new_link.short_code,
            clicks: 0,
            created_at: now,
            updated_at: now,
            expires_at: new_link.expires_at,
        };

        state.links.insert(id, link.clone());
        Ok(link)
    }

    async fn save(&self, link: ShortLink) -> Result<ShortLink, AppError> {
        let mut state = self.lock();

        let stored = state.links.get_mut(&link.id).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "id": link.id }))
        })?;

        // Only the mutable fields move; clicks, short_code and created_at
        // are owned by other paths.
        stored.original_url = link.original_url;
        stored.expires_at = link.expires_at;
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().links.remove(&id).is_some())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let mut state = self.lock();

        let link = state
            .links
            .values_mut()
            .find(|link| link.short_code == code);

        Ok(link.map(|link| {
            link.clicks += 1;
            link.updated_at = Utc::now();
            link.clone()
        }))
    }
}
