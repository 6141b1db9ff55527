//! Product record as loaded from the catalog data source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A product in the catalog.
///
/// Created at catalog-load time and immutable for the rest of the
/// session. `stock` is display information only: adding a product to the
/// cart never decrements it (there are no reservation semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id within the loaded catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Non-negative unit price.
    pub price: Decimal,
    /// Units available, `0` means sold out.
    pub stock: u32,
    /// Opaque image URL, rendered by the browser and never fetched here.
    pub image: String,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
