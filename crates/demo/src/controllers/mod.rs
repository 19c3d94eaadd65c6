//! UI-facing controllers.
//!
//! Bind user-triggered events to the core flows and hold the minimal
//! state a renderer needs. Both controllers are immutable-update: every
//! event produces a successor state value, never an in-place edit.

pub mod cart;
pub mod form;

pub use cart::CartSession;
pub use form::{FormState, LoginFormController};
