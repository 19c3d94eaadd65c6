//! The login wire contract and session identity.
//!
//! The login exchange is the demo's only wire-level contract: one request
//! carrying the credentials, answered either by a success body with the
//! user's public identity or by a status-coded failure body carrying a
//! message. Both sides of the exchange (the axum endpoint and the reqwest
//! client) use these types, so the contract cannot drift.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email, matched exactly (case-sensitive).
    pub email: String,
    /// Account password, compared by exact string equality.
    pub password: String,
}

/// The user's public identity as carried in a successful login response.
///
/// Never includes the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Directory ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// A successful login response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSuccess {
    /// Always `true` on this body.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// The authenticated user's public identity.
    pub user: SessionUser,
}

/// A failed login response body (any non-2xx status).
///
/// Failures carry only a message; the two 401 causes are distinguishable
/// by message text alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFailure {
    /// Human-readable failure message.
    pub message: String,
}

/// The minimal identity record produced by a successful login exchange.
///
/// Held transiently by the caller; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Directory ID of the logged-in user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

impl From<SessionUser> for Session {
    fn from(user: SessionUser) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// The failure messages of the login endpoint.
///
/// These are part of the observable contract: a 401 response is
/// `UserNotFound` or `InvalidPassword` purely by its message text, there
/// is no machine-readable error code. Note that this distinguishability
/// leaks which emails are registered; a production deployment should
/// collapse both 401s into one message before exposing the endpoint.
pub mod messages {
    /// 400: email or password missing from the request.
    pub const MISSING_FIELDS: &str = "email and password are required";
    /// 401: no directory entry with the given email.
    pub const USER_NOT_FOUND: &str = "user not found";
    /// 401: the password does not match the directory entry.
    pub const INVALID_PASSWORD: &str = "invalid password";
    /// 500: unexpected internal failure.
    pub const INTERNAL_ERROR: &str = "internal server error";
}
