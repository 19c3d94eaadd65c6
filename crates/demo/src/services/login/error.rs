//! Login client error types.

use thiserror::Error;

/// Errors a login dispatch can resolve to.
///
/// This is a closed set: every response the server can produce, and every
/// transport failure, maps onto exactly one variant. The `Display` output
/// is the single user-facing message the UI surfaces verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The server rejected the request for missing fields (400).
    #[error("email and password are required")]
    MissingFields,

    /// No account with the given email (401).
    #[error("user not found")]
    UserNotFound,

    /// The password did not match (401).
    #[error("invalid password")]
    InvalidPassword,

    /// The server failed or answered outside the contract (500, unknown
    /// status, or an undecodable body).
    #[error("the server reported an error, please try again later")]
    ServerError,

    /// The request never completed (connection failure).
    #[error("network connection failed, please try again later")]
    NetworkError,
}
