//! Core types for Mercadito.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::ProductId;
pub use price::format_price;
pub use product::Product;
