//! Pocket Market Core - Shared types library.
//!
//! This crate provides common types used across all Pocket Market components:
//! - `demo` - Interactive demo application (login + cart flows)
//! - `integration-tests` - End-to-end tests against the demo API
//!
//! # Architecture
//!
//! The core crate contains only types and rules - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   credential validation rules shared between client and server
//! - [`cart`] - The cart value type and its aggregation rules
//! - [`checkout`] - The checkout commit state machine
//! - [`login`] - The login wire contract and session identity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod login;
pub mod types;

pub use cart::{Cart, CartLine, CatalogItem};
pub use checkout::{CheckoutError, CheckoutState};
pub use login::{LoginFailure, LoginRequest, LoginSuccess, Session, SessionUser};
pub use types::*;
