//! The checkout commit state machine.
//!
//! Committing a cart moves through `Idle -> Processing -> Committed ->
//! Idle`. The transitions are pure value-to-value functions; the demo
//! crate drives them around one simulated server round trip. A transition
//! requested from the wrong source state leaves the state unchanged, so a
//! stray completion signal can never corrupt the machine.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Error produced by a failed checkout round trip.
///
/// The reference exchange always succeeds; this edge exists so a failure
/// returns the machine to `Idle` with the cart untouched instead of
/// wedging it in `Processing`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The server rejected or failed the commit round trip.
    #[error("checkout exchange failed: {0}")]
    Exchange(String),
}

/// Where the checkout process currently stands.
///
/// `Idle` is the initial state and the terminal state after every commit
/// or failure. `Committed` is transient: the driver clears the cart and
/// settles back to `Idle` in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// No commit in flight.
    #[default]
    Idle,
    /// A commit round trip has been issued and not yet completed.
    Processing,
    /// The round trip succeeded; the cart is about to be cleared.
    Committed,
}

impl CheckoutState {
    /// Whether the machine is in its resting state.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// React to a checkout request.
    ///
    /// Fires `Idle -> Processing` only when the cart is non-empty;
    /// checkout on an empty cart is a no-op that stays `Idle`.
    #[must_use]
    pub fn begin(self, cart: &Cart) -> Self {
        match self {
            Self::Idle if !cart.is_empty() => Self::Processing,
            other => other,
        }
    }

    /// React to a successful round-trip completion: `Processing -> Committed`.
    #[must_use]
    pub fn committed(self) -> Self {
        match self {
            Self::Processing => Self::Committed,
            other => other,
        }
    }

    /// React to a failed round trip: `Processing -> Idle`.
    ///
    /// The caller must leave the cart untouched on this edge.
    #[must_use]
    pub fn failed(self) -> Self {
        match self {
            Self::Processing => Self::Idle,
            other => other,
        }
    }

    /// Settle after a commit: `Committed -> Idle`.
    #[must_use]
    pub fn settled(self) -> Self {
        match self {
            Self::Committed => Self::Idle,
            other => other,
        }
    }
}
