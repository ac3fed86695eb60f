//! Shared application state
//!
//! The router's state type. Wraps the service context and the loaded
//! configuration behind cheap clones, so every handler extracts the same
//! underlying instances.

use std::sync::Arc;

use weave_common::{AppConfig, JwtService};
use weave_service::ServiceContext;

/// State handed to every handler through Axum's `State` extractor
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Repositories and services, wired at startup
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shortcut used by the auth extractor
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

// Manual Debug keeps the JWT secret inside the config out of log output
impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
