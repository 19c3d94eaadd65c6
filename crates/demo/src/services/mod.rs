//! Service clients for the demo's two exchanges.

pub mod checkout;
pub mod login;

pub use checkout::{CheckoutExchange, OrderConfirmation};
pub use login::{LoginClient, LoginError};
