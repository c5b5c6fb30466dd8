use std::sync::Arc;

use indiepage_core::service::LandingPageService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT verification key, timeouts).
    pub config: Arc<ServerConfig>,
    /// Landing-page configuration service over the active store.
    pub pages: LandingPageService,
}
