//! Directory listing route handler.
//!
//! Returns the seeded demo accounts, fixture passwords included - the demo
//! UI displays them as test credentials.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::models::DirectoryUser;
use crate::state::AppState;

/// List the user directory.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<DirectoryUser>> {
    let users = state.directory().list().to_vec();
    tracing::debug!(count = users.len(), "directory listed");
    Json(users)
}
