//! Session-scoped shopping cart.
//!
//! The cart is an ordered list of product snapshots. There is no quantity
//! field and no single-item removal: adding the same product twice yields
//! two entries, and the only destructive operation is `clear`. This
//! mirrors the storefront's observed behavior exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// A snapshot of a product's fields at the moment it was added.
///
/// Independent of the source `Product`: later catalog changes (a fresh
/// load in a new session, say) never affect items already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Ordered sequence of cart items, insertion order preserved.
///
/// Serialized into the session between requests; starts empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a snapshot of `product`.
    ///
    /// Always succeeds; does not check or decrement stock.
    pub fn add(&mut self, product: &Product) {
        self.items.push(CartItem::from(product));
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of item prices in current cart order.
    ///
    /// Recomputed on every call; nothing is cached.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items (duplicates counted separately).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            price,
            stock: 5,
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_same_product_twice_keeps_two_entries() {
        let p1 = product("p1", Decimal::new(250, 0));
        let mut cart = Cart::new();
        cart.add(&p1);
        cart.add(&p1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Decimal::new(500, 0));
    }

    #[test]
    fn test_total_is_order_independent() {
        let p1 = product("p1", Decimal::new(250, 0));
        let p2 = product("p2", Decimal::new(1205, 1));

        let mut forward = Cart::new();
        forward.add(&p1);
        forward.add(&p2);

        let mut backward = Cart::new();
        backward.add(&p2);
        backward.add(&p1);

        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.total(), Decimal::new(3705, 1));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product("p1", Decimal::new(10, 0)));
        cart.add(&product("p2", Decimal::new(20, 0)));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_item_is_a_snapshot_of_product_fields() {
        let p1 = product("p1", Decimal::new(250, 0));
        let mut cart = Cart::new();
        cart.add(&p1);

        let item = cart.items().first().expect("one item");
        assert_eq!(item.product_id, p1.id);
        assert_eq!(item.name, p1.name);
        assert_eq!(item.price, p1.price);
        assert_eq!(item.image, p1.image);
    }

    #[test]
    fn test_cart_round_trips_through_serde() {
        let mut cart = Cart::new();
        cart.add(&product("p1", Decimal::new(250, 0)));

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored, cart);
    }
}
