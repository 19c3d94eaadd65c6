//! Pocket Market demo library.
//!
//! This crate provides the demo functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod directory;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the demo application router.
///
/// Shared between the binary and the integration tests so both serve the
/// exact same routes.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
