//! Navigation state resolution.
//!
//! The whole navigation protocol is one optional `id` query parameter:
//! absent means the catalog view, present means the detail view for that
//! product. A QR scan lands on the same `/?id=` URL a catalog row links
//! to, so deep links and in-page navigation share one code path.

use mercadito_core::Product;

use crate::catalog::Catalog;

/// The view selected by the current query parameters.
#[derive(Debug)]
pub enum View<'a> {
    /// Product listing (initial state, no `id` parameter).
    Catalog,
    /// Detail view for a known product.
    Detail(&'a Product),
    /// Fallback for an `id` that matches no product.
    NotFound(&'a str),
}

/// Resolve the `id` query parameter against the loaded catalog.
///
/// An empty parameter value counts as cleared (catalog view). An unknown
/// id resolves to the not-found fallback rather than an error.
#[must_use]
pub fn resolve<'a>(catalog: &'a Catalog, id: Option<&'a str>) -> View<'a> {
    match id {
        None | Some("") => View::Catalog,
        Some(id) => catalog.find(id).map_or(View::NotFound(id), View::Detail),
    }
}
