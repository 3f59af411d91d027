//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::authorization::AuthorizationEngine;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across workers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authorization engine
    pub engine: Arc<AuthorizationEngine>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, engine: AuthorizationEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}
