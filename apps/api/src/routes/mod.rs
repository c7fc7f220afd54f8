pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::context::handlers;
use crate::errors::AppError;
use crate::login::handlers::handle_login_page;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Context API
        .route("/api/v1/context", post(handlers::handle_build_context))
        .route(
            "/api/v1/context/prompt",
            post(handlers::handle_context_prompt),
        )
        .route(
            "/api/v1/context/format",
            post(handlers::handle_format_context),
        )
        .route(
            "/api/v1/context/validate",
            post(handlers::handle_validate_profile),
        )
        // Login page
        .route("/login", get(handle_login_page))
        .fallback(not_found)
        .with_state(state)
}
