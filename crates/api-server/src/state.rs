//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::service::AuthService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}
