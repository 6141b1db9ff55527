//! Session keys.
//!
//! The cart (`mercadito_core::Cart`) is serialized under a single key;
//! navigation state lives entirely in the URL and is never stored.

/// Session keys for cart data.
pub mod keys {
    /// Key for storing the session cart.
    pub const CART: &str = "cart";
}
