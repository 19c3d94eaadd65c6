//! The cart value type and its aggregation rules.
//!
//! A [`Cart`] is an immutable-update value: every operation consumes the
//! cart and returns the successor state, which keeps histories testable
//! and makes equality checks trivial. Lines keep their first-insertion
//! position for display, and the total is recomputed from the line set on
//! every read so it can never go stale.
//!
//! Cart operations raise no errors: unknown ids are silent no-ops and
//! non-positive quantities are treated as removal.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// A purchasable item as listed in the catalog (no quantity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item ID.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
}

/// One line of the cart: an item plus the quantity in the cart.
///
/// Invariant: `quantity >= 1`. A line that would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unique item ID.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units of this item in the cart. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// The cart: a mapping from item id to line, ordered by first insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a catalog item.
    ///
    /// If the item is already in the cart its quantity goes up by one and
    /// its display position is unchanged; otherwise a new line with
    /// quantity 1 is appended.
    #[must_use]
    pub fn add_item(mut self, item: CatalogItem) -> Self {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                id: item.id,
                name: item.name,
                price: item.price,
                quantity: 1,
            }),
        }

        self
    }

    /// Set an item's quantity to an absolute value.
    ///
    /// A quantity of zero or below behaves exactly like
    /// [`remove_item`](Self::remove_item). Unknown ids are a no-op.
    #[must_use]
    pub fn update_quantity(mut self, id: ItemId, quantity: i64) -> Self {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }

        self
    }

    /// Remove an item from the cart. No-op if the id is not present.
    #[must_use]
    pub fn remove_item(mut self, id: ItemId) -> Self {
        self.lines.retain(|line| line.id != id);
        self
    }

    /// Sum of `price * quantity` over all lines.
    ///
    /// Recomputed from the line set on every call rather than cached, so
    /// it cannot diverge from the lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The cart lines in display (first-insertion) order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by item id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
