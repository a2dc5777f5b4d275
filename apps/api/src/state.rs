use std::sync::Arc;

use sqlx::PgPool;

use crate::ai::GeminiClient;
use crate::config::Config;
use crate::sections::ResumePersistence;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: GeminiClient,
    /// Persistence collaborator handed to every hydrated Section Settings
    /// Store; an `Arc<dyn …>` so tests can swap in a fake.
    pub persistence: Arc<dyn ResumePersistence>,
    pub config: Config,
}
