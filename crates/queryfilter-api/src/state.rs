//! Application state shared across all handlers.

use std::sync::Arc;

use queryfilter_core::config::AppConfig;
use queryfilter_database::{DatabasePool, FilterRepository};
use queryfilter_scope::ScopeComposer;

/// Shared dependencies, passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Filtered listing over any model
    pub repository: FilterRepository,
}

impl AppState {
    /// Wire the state from a loaded configuration and a connected pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let composer = ScopeComposer::new(config.filter.clone());
        let repository = FilterRepository::new(db.pool().clone(), composer);
        Self {
            config: Arc::new(config),
            db,
            repository,
        }
    }
}
