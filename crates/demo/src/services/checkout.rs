//! The simulated checkout exchange.
//!
//! One asynchronous round trip per checkout request, with a configurable
//! latency standing in for the server. The exchange in this configuration
//! always succeeds; the `Result` return keeps the failure edge explicit
//! for the state machine driver instead of hiding it in a timer callback.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use pocket_market_core::{Cart, CheckoutError, Price};

/// Receipt of a committed checkout round trip.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderConfirmation {
    /// Server-assigned order id.
    pub order_id: Uuid,
    /// Total committed, as computed from the cart at commit time.
    pub total: Price,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// The simulated server side of a checkout commit.
#[derive(Debug, Clone)]
pub struct CheckoutExchange {
    latency: Duration,
}

impl CheckoutExchange {
    /// Create an exchange with the given simulated round-trip latency.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Issue the commit round trip for a cart.
    ///
    /// Runs to completion once issued; there is no cancellation.
    ///
    /// # Errors
    ///
    /// The simulated exchange never fails. The error type exists so the
    /// driver must handle the failure edge of the state machine.
    #[instrument(skip(self, cart), fields(items = cart.len(), total = %cart.total()))]
    pub async fn commit(&self, cart: &Cart) -> Result<OrderConfirmation, CheckoutError> {
        tracing::debug!(latency_ms = self.latency.as_millis(), "checkout round trip issued");
        tokio::time::sleep(self.latency).await;

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            total: cart.total(),
            placed_at: Utc::now(),
        };
        tracing::info!(order_id = %confirmation.order_id, "order created");

        Ok(confirmation)
    }
}
