//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain decimal amounts in the shop's display currency. Using
//! [`rust_decimal::Decimal`] keeps line totals exact (`6.5 * 2 == 13.0`),
//! which floating point would not guarantee.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative decimal price.
///
/// ## Examples
///
/// ```
/// use pocket_market_core::Price;
/// use rust_decimal::Decimal;
///
/// let apple = Price::new(Decimal::new(65, 1)).unwrap(); // 6.5
/// assert_eq!((apple * 2).amount(), Decimal::new(130, 1)); // 13.0
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Line total: unit price times quantity.
impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
