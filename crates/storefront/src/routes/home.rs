//! Storefront page handler.
//!
//! One handler serves the catalog view, the product detail view, and the
//! not-found fallback; the `id` query parameter selects between them.
//! Every response is a full page render with the cart sidebar included.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use mercadito_core::{Cart, Product, format_price};

use crate::checkout;
use crate::error::Result;
use crate::filters;
use crate::nav::{self, View};
use crate::routes::cart::session_cart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub in_stock: bool,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            stock: product.stock,
            in_stock: product.in_stock(),
            image: product.image.clone(),
        }
    }
}

/// One cart line in the sidebar.
#[derive(Clone)]
pub struct CartLineView {
    pub name: String,
    pub price: String,
}

/// Sidebar cart display data, rendered on every page.
#[derive(Clone)]
pub struct CartSidebarView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub checkout_url: String,
}

impl CartSidebarView {
    /// Project the session cart for display.
    ///
    /// The total is recomputed here on every render; nothing is cached
    /// between requests.
    #[must_use]
    pub fn from_cart(cart: &Cart, whatsapp_phone: &str) -> Self {
        Self {
            lines: cart
                .items()
                .iter()
                .map(|item| CartLineView {
                    name: item.name.clone(),
                    price: format_price(item.price),
                })
                .collect(),
            total: format_price(cart.total()),
            checkout_url: checkout::build_whatsapp_link(cart.items(), whatsapp_phone),
        }
    }
}

/// Navigation query parameters.
///
/// `id` is the whole navigation protocol; `added` flags the transient
/// add-to-cart confirmation after the redirect.
#[derive(Debug, Deserialize)]
pub struct NavQuery {
    pub id: Option<String>,
    pub added: Option<String>,
}

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub products: Vec<ProductView>,
    pub cart: CartSidebarView,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
    pub added: bool,
    pub cart: CartSidebarView,
}

/// Fallback for an unknown product id.
#[derive(Template, WebTemplate)]
#[template(path = "product/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
    pub cart: CartSidebarView,
}

/// Display the storefront: catalog, detail, or not-found fallback.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<NavQuery>,
) -> Result<Response> {
    let catalog = state.catalog().load().await?;
    let cart = session_cart(&session).await?;
    let sidebar = CartSidebarView::from_cart(&cart, &state.config().whatsapp_phone);

    let response = match nav::resolve(&catalog, query.id.as_deref()) {
        View::Catalog => CatalogTemplate {
            products: catalog.products().iter().map(ProductView::from).collect(),
            cart: sidebar,
        }
        .into_response(),
        View::Detail(product) => ProductShowTemplate {
            product: ProductView::from(product),
            added: query.added.as_deref() == Some("1"),
            cart: sidebar,
        }
        .into_response(),
        View::NotFound(id) => {
            tracing::debug!(product_id = %id, "detail view for unknown product");
            ProductNotFoundTemplate {
                id: id.to_string(),
                cart: sidebar,
            }
            .into_response()
        }
    };

    Ok(response)
}
