//! Core types for Pocket Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod validation;

pub use id::*;
pub use money::{Price, PriceError};
pub use validation::{
    MIN_PASSWORD_LENGTH, ValidationError, missing_required_fields, validate_credentials,
};
