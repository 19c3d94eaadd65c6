//! Demo configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DEMO_HOST` - Bind address (default: 127.0.0.1)
//! - `DEMO_PORT` - Listen port (default: 3000)
//! - `DEMO_BASE_URL` - Public URL the login client posts to
//!   (default: `http://{host}:{port}`)
//! - `DEMO_CHECKOUT_LATENCY_MS` - Simulated checkout round-trip latency
//!   in milliseconds (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Default simulated checkout round-trip latency.
const DEFAULT_CHECKOUT_LATENCY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Demo application configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL the login client dispatches against
    pub base_url: String,
    /// Simulated checkout round-trip latency
    pub checkout_latency: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("DEMO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DEMO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DEMO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DEMO_PORT".to_string(), e.to_string()))?;
        let base_url =
            get_optional_env("DEMO_BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));
        let checkout_latency_ms = match get_optional_env("DEMO_CHECKOUT_LATENCY_MS") {
            Some(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("DEMO_CHECKOUT_LATENCY_MS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CHECKOUT_LATENCY_MS,
        };
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            checkout_latency: Duration::from_millis(checkout_latency_ms),
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://127.0.0.1:3000".to_string(),
            checkout_latency: Duration::from_millis(DEFAULT_CHECKOUT_LATENCY_MS),
            sentry_dsn: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
