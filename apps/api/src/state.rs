use std::sync::Arc;

use crate::config::Config;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, read-only afterwards.
    pub registry: Arc<TemplateRegistry>,
}

impl AppState {
    pub fn new(config: Config, registry: TemplateRegistry) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
        }
    }
}
