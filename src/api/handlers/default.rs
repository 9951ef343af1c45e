//! Terminal handler answering requests no redirect layer matched.

use axum::extract::State;

use crate::state::AppState;

/// Responds `200 OK` with the configured plain-text body.
///
/// # Endpoint
///
/// Any method, any path not matched by the redirect chain.
pub async fn default_handler(State(state): State<AppState>) -> String {
    state.default_body.to_string()
}
