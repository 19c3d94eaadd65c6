//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::DemoConfig;
use crate::directory::UserDirectory;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the read-only user directory.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DemoConfig,
    directory: UserDirectory,
}

impl AppState {
    /// Create application state with the seeded demo directory.
    #[must_use]
    pub fn new(config: DemoConfig) -> Self {
        Self::with_directory(config, UserDirectory::seeded())
    }

    /// Create application state with a caller-provided directory.
    #[must_use]
    pub fn with_directory(config: DemoConfig, directory: UserDirectory) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, directory }),
        }
    }

    /// Get a reference to the demo configuration.
    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.inner.config
    }

    /// Get a reference to the user directory.
    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.inner.directory
    }
}
