//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

/// When this process started serving.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentInfo {
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentInfo {
    pub fn now() -> Self {
        Self {
            deployed_at: Utc::now(),
        }
    }

    /// Deploy time in Japan Standard Time, e.g. `2024-05-01 18:30:00 JST`.
    pub fn deployed_at_jst(&self) -> String {
        // JST has no DST, so a fixed shift is exact.
        let local = self.deployed_at.naive_utc() + Duration::hours(9);
        format!("{} JST", local.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub deployment: DeploymentInfo,
}

impl AppState {
    /// Build the application state with the in-memory store.
    pub fn new() -> Self {
        let state = Self::with_store(Arc::new(InMemoryPostStore::new()));
        tracing::info!("Application state initialized");
        state
    }

    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self {
            posts,
            deployment: DeploymentInfo::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
