//! Cart controller.
//!
//! Binds cart events to the core cart operations and drives the checkout
//! state machine around the simulated exchange. All mutations run on one
//! logical thread of event handling; a mutation's effect on the total is
//! visible to the very next read.

use pocket_market_core::{Cart, CatalogItem, CheckoutError, CheckoutState, ItemId};

use crate::services::checkout::{CheckoutExchange, OrderConfirmation};

/// The cart panel's state: the cart plus where checkout stands.
///
/// Immutable-update: events produce successor values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSession {
    cart: Cart,
    checkout: CheckoutState,
}

impl CartSession {
    /// An empty cart with checkout at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Where the checkout process stands.
    #[must_use]
    pub const fn checkout_state(&self) -> CheckoutState {
        self.checkout
    }

    /// Handle an add-to-cart event.
    #[must_use]
    pub fn add_item(mut self, item: CatalogItem) -> Self {
        tracing::info!(item_id = %item.id, name = %item.name, "adding item to cart");
        self.cart = self.cart.add_item(item);
        tracing::debug!(total = %self.cart.total(), items = self.cart.len(), "cart updated");
        self
    }

    /// Handle a quantity-change event. Zero or below removes the item.
    #[must_use]
    pub fn update_quantity(mut self, id: ItemId, quantity: i64) -> Self {
        tracing::info!(item_id = %id, quantity, "updating quantity");
        self.cart = self.cart.update_quantity(id, quantity);
        tracing::debug!(total = %self.cart.total(), items = self.cart.len(), "cart updated");
        self
    }

    /// Handle a remove-item event.
    #[must_use]
    pub fn remove_item(mut self, id: ItemId) -> Self {
        tracing::info!(item_id = %id, "removing item from cart");
        self.cart = self.cart.remove_item(id);
        tracing::debug!(total = %self.cart.total(), items = self.cart.len(), "cart updated");
        self
    }

    /// Handle a checkout event.
    ///
    /// A no-op on an empty cart. Otherwise issues exactly one round trip
    /// and settles the outcome; once issued the round trip always runs to
    /// completion - there is no cancellation or retry.
    pub async fn checkout(
        self,
        exchange: &CheckoutExchange,
    ) -> (Self, Option<OrderConfirmation>) {
        let checkout = self.checkout.begin(&self.cart);
        if checkout == self.checkout {
            // No transition fired: empty cart, or a commit already in flight
            tracing::debug!("checkout request ignored");
            return (self, None);
        }

        tracing::info!(
            items = self.cart.len(),
            total = %self.cart.total(),
            "checkout started"
        );

        let session = Self { checkout, ..self };
        let outcome = exchange.commit(&session.cart).await;
        session.settle(outcome)
    }

    /// Settle a round-trip outcome.
    ///
    /// Success commits and atomically clears the cart before returning to
    /// `Idle`; failure returns to `Idle` with the cart untouched. A
    /// completion signal arriving outside `Processing` changes nothing.
    #[must_use]
    pub fn settle(
        self,
        outcome: Result<OrderConfirmation, CheckoutError>,
    ) -> (Self, Option<OrderConfirmation>) {
        if self.checkout != CheckoutState::Processing {
            return (self, None);
        }

        match outcome {
            Ok(confirmation) => {
                tracing::info!(order_id = %confirmation.order_id, "checkout committed, clearing cart");
                let checkout = self.checkout.committed().settled();
                (
                    Self {
                        cart: Cart::new(),
                        checkout,
                    },
                    Some(confirmation),
                )
            }
            Err(error) => {
                tracing::warn!(error = %error, "checkout failed, cart left untouched");
                (
                    Self {
                        checkout: self.checkout.failed(),
                        ..self
                    },
                    None,
                )
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use pocket_market_core::Price;

    use super::*;

    fn apple() -> CatalogItem {
        CatalogItem {
            id: ItemId::new(1),
            name: "apple".to_string(),
            price: Price::new(Decimal::new(65, 1)).unwrap(),
        }
    }

    fn banana() -> CatalogItem {
        CatalogItem {
            id: ItemId::new(2),
            name: "banana".to_string(),
            price: Price::new(Decimal::new(42, 1)).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_checkout_commits_and_clears_cart() {
        let session = CartSession::new().add_item(apple()).add_item(banana());
        let exchange = CheckoutExchange::new(Duration::from_millis(1));

        let (session, confirmation) = session.checkout(&exchange).await;

        let confirmation = confirmation.unwrap();
        assert_eq!(
            confirmation.total,
            Price::new(Decimal::new(107, 1)).unwrap()
        );
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().total(), Price::ZERO);
        assert_eq!(session.checkout_state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_checkout_on_empty_cart_is_noop() {
        let session = CartSession::new();
        let exchange = CheckoutExchange::new(Duration::from_millis(1));

        let (session, confirmation) = session.checkout(&exchange).await;

        assert!(confirmation.is_none());
        assert_eq!(session.checkout_state(), CheckoutState::Idle);
    }

    #[test]
    fn test_failed_round_trip_leaves_cart_untouched() {
        let session = CartSession::new().add_item(apple());
        let before = session.cart().clone();

        // Drive the machine to Processing by hand, then fail the round trip
        let session = CartSession {
            checkout: session.checkout_state().begin(session.cart()),
            cart: before.clone(),
        };
        let (session, confirmation) = session.settle(Err(CheckoutError::Exchange(
            "connection reset".to_string(),
        )));

        assert!(confirmation.is_none());
        assert_eq!(session.cart(), &before);
        assert_eq!(session.checkout_state(), CheckoutState::Idle);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let session = CartSession::new().add_item(apple());
        let before = session.clone();

        let (session, confirmation) = session.settle(Ok(OrderConfirmation {
            order_id: Uuid::new_v4(),
            total: Price::ZERO,
            placed_at: Utc::now(),
        }));

        assert!(confirmation.is_none());
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn test_end_to_end_cart_scenario() {
        let exchange = CheckoutExchange::new(Duration::from_millis(1));
        let dec = |units: i64| Price::new(Decimal::new(units, 1)).unwrap();

        // add apple -> 6.5
        let session = CartSession::new().add_item(apple());
        assert_eq!(session.cart().total(), dec(65));

        // add apple again -> quantity 2, 13.0
        let session = session.add_item(apple());
        assert_eq!(session.cart().get(ItemId::new(1)).unwrap().quantity, 2);
        assert_eq!(session.cart().total(), dec(130));

        // add banana -> 17.2
        let session = session.add_item(banana());
        assert_eq!(session.cart().total(), dec(172));

        // set apple quantity to 0 -> removed, 4.2
        let session = session.update_quantity(ItemId::new(1), 0);
        assert!(session.cart().get(ItemId::new(1)).is_none());
        assert_eq!(session.cart().total(), dec(42));

        // checkout -> cart empty, total 0
        let (session, confirmation) = session.checkout(&exchange).await;
        assert!(confirmation.is_some());
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().total(), Price::ZERO);
    }
}
