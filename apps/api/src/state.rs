use std::sync::Arc;

use crate::config::Config;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Redis-backed in production, in-memory when `REDIS_URL` is unset and in tests.
    pub store: Arc<dyn AnalysisStore>,
}
