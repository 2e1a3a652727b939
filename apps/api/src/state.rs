use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::store::current::CurrentSlot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Current-analysis slot. Redis-backed in production; in-memory in tests.
    pub slot: Arc<dyn CurrentSlot>,
    #[allow(dead_code)]
    pub config: Config,
}
