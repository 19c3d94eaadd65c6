//! Login form controller.
//!
//! Owns the submit flow: fail-fast validation (no dispatch when any rule
//! fires), one login dispatch, and mapping the result into the state the
//! renderer shows - an ordered error list or a success greeting.

use pocket_market_core::Session;
use pocket_market_core::validate_credentials;

use crate::services::login::LoginClient;

/// The login form's render state.
///
/// Immutable-update: events produce successor values. Every submit
/// attempt starts from a state with the previous errors and success
/// message cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Current email input.
    pub email: String,
    /// Current password input.
    pub password: String,
    /// Ordered list of messages to render, newest attempt only.
    pub errors: Vec<String>,
    /// Whether a dispatch is in flight.
    pub loading: bool,
    /// Greeting shown after a successful login.
    pub success_message: Option<String>,
}

impl FormState {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into the email field.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Type into the password field.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// The state rendered while a submit attempt runs: previous errors
    /// and success cleared, loading flag set.
    #[must_use]
    pub fn submitting(mut self) -> Self {
        self.errors.clear();
        self.success_message = None;
        self.loading = true;
        self
    }

    /// Resolve the attempt with an error list.
    #[must_use]
    fn rejected(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self.loading = false;
        self
    }

    /// Resolve the attempt with a success greeting; inputs are cleared.
    #[must_use]
    fn accepted(self, message: String) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            errors: Vec::new(),
            loading: false,
            success_message: Some(message),
        }
    }
}

/// Controller binding the submit event to validation and dispatch.
#[derive(Debug, Clone)]
pub struct LoginFormController {
    client: LoginClient,
}

impl LoginFormController {
    /// Create a controller around a login client.
    #[must_use]
    pub const fn new(client: LoginClient) -> Self {
        Self { client }
    }

    /// Handle a submit event.
    ///
    /// Runs the full validation pipeline first; any violation blocks the
    /// network dispatch entirely. Otherwise one login attempt is made and
    /// its outcome mapped onto the returned state. The session, when
    /// present, is handed to the caller rather than stored - the form
    /// holds no identity.
    pub async fn submit(&self, state: FormState) -> (FormState, Option<Session>) {
        let state = state.submitting();

        let violations = validate_credentials(&state.email, &state.password);
        if !violations.is_empty() {
            tracing::warn!(count = violations.len(), "validation failed, blocking dispatch");
            let messages = violations.iter().map(ToString::to_string).collect();
            return (state.rejected(messages), None);
        }

        tracing::info!("validation passed, dispatching login");
        match self.client.login(&state.email, &state.password).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user_id, "login succeeded");
                let greeting = format!("Welcome back, {}!", session.name);
                (state.accepted(greeting), Some(session))
            }
            Err(error) => {
                tracing::warn!(error = %error, "login failed");
                (state.rejected(vec![error.to_string()]), None)
            }
        }
    }
}
