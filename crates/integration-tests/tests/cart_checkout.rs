//! Integration tests for the cart and checkout flow.
//!
//! Drives the cart controller through the catalog exactly as the demo UI
//! would, committing through the simulated exchange.

use std::time::Duration;

use rust_decimal::Decimal;

use pocket_market_core::{CheckoutState, ItemId, Price};
use pocket_market_demo::catalog;
use pocket_market_demo::controllers::CartSession;
use pocket_market_demo::services::checkout::CheckoutExchange;

fn price(units: i64) -> Price {
    Price::new(Decimal::new(units, 1)).expect("fixture price")
}

fn item(id: i32) -> pocket_market_core::CatalogItem {
    catalog::find(ItemId::new(id)).expect("catalog item")
}

#[tokio::test]
async fn test_full_cart_scenario() {
    let exchange = CheckoutExchange::new(Duration::from_millis(10));

    // add apple -> total 6.5
    let session = CartSession::new().add_item(item(1));
    assert_eq!(session.cart().total(), price(65));

    // add apple again -> one line, quantity 2, total 13.0
    let session = session.add_item(item(1));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().get(ItemId::new(1)).expect("line").quantity, 2);
    assert_eq!(session.cart().total(), price(130));

    // add banana -> total 17.2
    let session = session.add_item(item(2));
    assert_eq!(session.cart().total(), price(172));

    // updateQuantity(apple, 0) -> apple removed, total 4.2
    let session = session.update_quantity(ItemId::new(1), 0);
    assert!(session.cart().get(ItemId::new(1)).is_none());
    assert_eq!(session.cart().total(), price(42));

    // checkout -> committed, cart empty, total 0, machine back at rest
    let (session, confirmation) = session.checkout(&exchange).await;
    let confirmation = confirmation.expect("checkout should commit");
    assert_eq!(confirmation.total, price(42));
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().total(), Price::ZERO);
    assert_eq!(session.checkout_state(), CheckoutState::Idle);
}

#[tokio::test]
async fn test_checkout_on_empty_cart_stays_idle() {
    let exchange = CheckoutExchange::new(Duration::from_millis(10));

    let (session, confirmation) = CartSession::new().checkout(&exchange).await;

    assert!(confirmation.is_none());
    assert_eq!(session.checkout_state(), CheckoutState::Idle);
    assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_catalog_wide_total() {
    // One of everything: 6.5 + 4.2 + 8.8 + 15.6 = 35.1
    let session = catalog::sample_catalog()
        .into_iter()
        .fold(CartSession::new(), CartSession::add_item);

    assert_eq!(session.cart().len(), 4);
    assert_eq!(session.cart().total(), price(351));
}
