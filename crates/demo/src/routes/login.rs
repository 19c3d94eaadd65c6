//! Login route handler: the server side of the login exchange.
//!
//! The handler re-checks the required-field rule even though the form
//! controller already fail-fasts client-side; the server treats every
//! caller as untrusted, and both layers share the rule definition in
//! `pocket_market_core::types::validation`.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::instrument;

use pocket_market_core::login::{LoginRequest, LoginSuccess, SessionUser};
use pocket_market_core::missing_required_fields;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Handle a login request.
///
/// Checks run in order: required fields (400), directory lookup by exact
/// email (401), password equality (401). A match answers 200 with the
/// user's public identity; the password never leaves the directory.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginSuccess>> {
    // An unreadable body is an internal failure on this contract, not a 400
    let Json(request) = payload.map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        email = %request.email,
        password_length = request.password.len(),
        "login request received"
    );

    if missing_required_fields(&request.email, &request.password) {
        tracing::warn!("login rejected: missing email or password");
        return Err(ApiError::MissingFields);
    }

    let Some(user) = state.directory().get_by_email(&request.email) else {
        tracing::warn!(email = %request.email, "login rejected: unknown user");
        return Err(ApiError::UserNotFound);
    };

    if user.password != request.password {
        tracing::warn!(user_id = %user.id, "login rejected: password mismatch");
        return Err(ApiError::InvalidPassword);
    }

    tracing::info!(user_id = %user.id, name = %user.name, "login successful");

    Ok(Json(LoginSuccess {
        success: true,
        message: "login successful".to_string(),
        user: SessionUser {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        },
    }))
}
