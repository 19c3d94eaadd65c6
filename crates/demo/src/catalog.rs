//! The sample product catalog.
//!
//! Four fixed demo products the cart controller adds from. Prices are in
//! the shop's display currency.

use rust_decimal::Decimal;

use pocket_market_core::{CatalogItem, ItemId, Price};

/// The demo catalog, in display order.
#[must_use]
pub fn sample_catalog() -> Vec<CatalogItem> {
    let item = |id: i32, name: &str, units: i64| CatalogItem {
        id: ItemId::new(id),
        name: name.to_string(),
        // Prices are tenths (6.5, 4.2, ...); Decimal keeps them exact
        price: Price::new(Decimal::new(units, 1)).unwrap_or(Price::ZERO),
    };

    vec![
        item(1, "apple", 65),
        item(2, "banana", 42),
        item(3, "orange", 88),
        item(4, "grape", 156),
    ]
}

/// Look up a catalog item by id.
#[must_use]
pub fn find(id: ItemId) -> Option<CatalogItem> {
    sample_catalog().into_iter().find(|item| item.id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_products() {
        assert_eq!(sample_catalog().len(), 4);
    }

    #[test]
    fn test_find() {
        let apple = find(ItemId::new(1)).unwrap();
        assert_eq!(apple.name, "apple");
        assert_eq!(apple.price, Price::new(Decimal::new(65, 1)).unwrap());

        assert!(find(ItemId::new(99)).is_none());
    }
}
