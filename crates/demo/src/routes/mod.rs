//! HTTP route handlers for the demo API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health     - Health check
//!
//! # API
//! POST /api/login  - Login exchange (the wire-level contract)
//! GET  /api/users  - Directory listing (demo fixture data)
//! ```

pub mod login;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login::login))
        .route("/users", get(users::list))
}

/// Create all routes for the demo.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
