//! Integration tests for Pocket Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pocket-market-integration-tests
//! ```
//!
//! Each test boots the demo router in-process on an ephemeral port, so no
//! external services or environment setup are required.
//!
//! # Test Categories
//!
//! - `login_flow` - Login exchange tests (typed client + raw wire shapes)
//! - `cart_checkout` - Cart aggregation and checkout commit tests

use std::time::Duration;

use reqwest::Client;

use pocket_market_demo::app;
use pocket_market_demo::config::DemoConfig;
use pocket_market_demo::state::AppState;

/// A booted demo server plus a client to drive it.
pub struct TestContext {
    /// Base URL of the in-process server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    /// Plain HTTP client for raw wire-shape assertions.
    pub client: Client,
}

impl TestContext {
    /// Boot the demo router on an ephemeral port.
    ///
    /// The checkout latency is shortened so tests stay fast; everything
    /// else matches the shipped configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind (test environment failure).
    pub async fn new() -> Self {
        let config = DemoConfig {
            checkout_latency: Duration::from_millis(10),
            ..DemoConfig::default()
        };
        let state = AppState::new(config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    /// URL of an API path on the booted server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
