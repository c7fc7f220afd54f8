use std::sync::Arc;

use crate::login::AmbientProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Ambient provider the login shell wraps its children in.
    pub provider: Arc<dyn AmbientProvider>,
}
