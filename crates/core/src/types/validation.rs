//! Credential validation rules.
//!
//! Single source of truth for the login form rules. The form controller
//! runs the full rule set before dispatching a request, and the login
//! endpoint independently re-checks the required-field rule on every
//! request it receives - both layers call into this module, so the two
//! checks cannot drift apart.

use serde::{Deserialize, Serialize};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A client-side-detected input defect that blocks request dispatch.
///
/// The variants form a closed set; the user-facing text is the `Display`
/// output of each variant.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The email field is empty.
    #[error("email is required")]
    EmailRequired,
    /// The email does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    EmailMalformed,
    /// The password field is empty.
    #[error("password is required")]
    PasswordRequired,
    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

/// Validate login credentials, returning every rule violation in order.
///
/// The email and password rules are evaluated independently, email first,
/// so a submission can collect violations from both fields at once. An
/// empty result means the input is acceptable to dispatch.
///
/// ```
/// use pocket_market_core::{ValidationError, validate_credentials};
///
/// assert_eq!(
///     validate_credentials("", "abc"),
///     vec![
///         ValidationError::EmailRequired,
///         ValidationError::PasswordTooShort,
///     ],
/// );
/// assert!(validate_credentials("a@b.com", "123456").is_empty());
/// ```
#[must_use]
pub fn validate_credentials(email: &str, password: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !email.contains('@') {
        errors.push(ValidationError::EmailMalformed);
    }

    if password.is_empty() {
        errors.push(ValidationError::PasswordRequired);
    } else if password.len() < MIN_PASSWORD_LENGTH {
        errors.push(ValidationError::PasswordTooShort);
    }

    errors
}

/// The required-field rule on its own.
///
/// This is the check the login endpoint repeats server-side (the server
/// treats its callers as untrusted, whether or not they ran
/// [`validate_credentials`] first).
#[must_use]
pub fn missing_required_fields(email: &str, password: &str) -> bool {
    email.is_empty() || password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_short_password() {
        assert_eq!(
            validate_credentials("", "abc"),
            vec![
                ValidationError::EmailRequired,
                ValidationError::PasswordTooShort,
            ],
        );
    }

    #[test]
    fn test_acceptable_input() {
        assert!(validate_credentials("a@b.com", "123456").is_empty());
    }

    #[test]
    fn test_malformed_email() {
        assert_eq!(
            validate_credentials("not-an-email", "123456"),
            vec![ValidationError::EmailMalformed],
        );
    }

    #[test]
    fn test_both_fields_empty() {
        assert_eq!(
            validate_credentials("", ""),
            vec![
                ValidationError::EmailRequired,
                ValidationError::PasswordRequired,
            ],
        );
    }

    #[test]
    fn test_rules_fire_independently() {
        // A malformed email does not mask a short password
        assert_eq!(
            validate_credentials("no-at-symbol", "12345"),
            vec![
                ValidationError::EmailMalformed,
                ValidationError::PasswordTooShort,
            ],
        );
    }

    #[test]
    fn test_minimum_length_is_accepted() {
        assert!(validate_credentials("a@b.com", "123456").is_empty());
        assert_eq!(
            validate_credentials("a@b.com", "12345"),
            vec![ValidationError::PasswordTooShort],
        );
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(missing_required_fields("", "123456"));
        assert!(missing_required_fields("a@b.com", ""));
        assert!(missing_required_fields("", ""));
        assert!(!missing_required_fields("a@b.com", "x"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "password must be at least 6 characters",
        );
        assert_eq!(ValidationError::EmailRequired.to_string(), "email is required");
    }
}
