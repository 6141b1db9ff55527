//! Hand-authored catalog used by the static backend.

use rust_decimal::Decimal;

use mercadito_core::{Product, ProductId};

/// The fixed product table.
///
/// `p2` is seeded sold out so the disabled detail view stays reachable
/// without a remote source.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("p1"),
            name: "Café de Especialidad".to_string(),
            price: Decimal::new(25000, 2),
            stock: 15,
            image: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=500".to_string(),
        },
        Product {
            id: ProductId::new("p2"),
            name: "Taza de Cerámica".to_string(),
            price: Decimal::new(12000, 2),
            stock: 0,
            image: "https://images.unsplash.com/photo-1514228742587-6b1558fcca3d?w=500".to_string(),
        },
        Product {
            id: ProductId::new("p3"),
            name: "Molino Manual".to_string(),
            price: Decimal::new(45000, 2),
            stock: 5,
            image: "https://images.unsplash.com/photo-1585445490387-f47934b73b54?w=500".to_string(),
        },
    ]
}
