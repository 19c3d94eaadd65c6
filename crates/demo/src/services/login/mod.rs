//! Login session client.
//!
//! Dispatches the login exchange and interprets the response into the
//! closed [`LoginError`] result set. The response body is read as text
//! first so decode failures can be logged with their payload; anything
//! the wire contract does not describe decodes to `ServerError` rather
//! than escaping as a raw transport error.

mod error;

pub use error::LoginError;

use reqwest::StatusCode;
use tracing::instrument;

use pocket_market_core::login::{LoginFailure, LoginRequest, LoginSuccess, Session, messages};

/// Client for the login exchange.
#[derive(Debug, Clone)]
pub struct LoginClient {
    client: reqwest::Client,
    base_url: String,
}

impl LoginClient {
    /// Create a new login client against a base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Dispatch one login attempt.
    ///
    /// A single attempt is made per call: no retry, no timeout beyond the
    /// transport's own, no cancellation once issued.
    ///
    /// # Errors
    ///
    /// Returns the [`LoginError`] variant the response (or its absence)
    /// maps onto.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/login", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "login request failed to complete");
                LoginError::NetworkError
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "login response received");

        // Read the body as text first for better error diagnostics
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to read login response body");
            LoginError::NetworkError
        })?;

        match status {
            StatusCode::OK => decode_success(&body),
            StatusCode::BAD_REQUEST => Err(LoginError::MissingFields),
            StatusCode::UNAUTHORIZED => Err(decode_unauthorized(&body)),
            _ => {
                tracing::warn!(status = %status, "login response outside the contract");
                Err(LoginError::ServerError)
            }
        }
    }
}

/// Decode a 200 body into a session.
fn decode_success(body: &str) -> Result<Session, LoginError> {
    let success: LoginSuccess = serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(200).collect::<String>(),
            "malformed login success body"
        );
        LoginError::ServerError
    })?;

    if !success.success {
        tracing::error!("login success body with success=false");
        return Err(LoginError::ServerError);
    }

    Ok(Session::from(success.user))
}

/// Decode a 401 body into its cause.
///
/// The two causes are distinguishable only by message text; an
/// unrecognized message is outside the contract.
fn decode_unauthorized(body: &str) -> LoginError {
    let Ok(failure) = serde_json::from_str::<LoginFailure>(body) else {
        tracing::error!(
            body = %body.chars().take(200).collect::<String>(),
            "malformed login failure body"
        );
        return LoginError::ServerError;
    };

    match failure.message.as_str() {
        messages::USER_NOT_FOUND => LoginError::UserNotFound,
        messages::INVALID_PASSWORD => LoginError::InvalidPassword,
        other => {
            tracing::warn!(message = %other, "unrecognized 401 failure message");
            LoginError::ServerError
        }
    }
}
