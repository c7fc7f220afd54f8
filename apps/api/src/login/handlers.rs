use axum::{extract::State, response::Html};
use tracing::debug;

use crate::login::shell::{render_login_page, LOGIN_MOUNT};
use crate::state::AppState;

/// GET /login
pub async fn handle_login_page(State(state): State<AppState>) -> Html<String> {
    debug!("Rendering login shell with '{}' provider", state.provider.name());
    Html(render_login_page(state.provider.as_ref(), LOGIN_MOUNT))
}
