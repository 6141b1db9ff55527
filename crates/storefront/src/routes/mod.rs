//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Catalog view, or detail view when `?id=` is set
//!                         (the QR deep-link entry point)
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (attempts a catalog load)
//!
//! # Cart
//! POST /cart/add        - Add a product snapshot (form `product_id`)
//! POST /cart/clear      - Empty the cart
//! ```
//!
//! Checkout is not a route: the sidebar renders a prefilled WhatsApp
//! link built by `crate::checkout`.

pub mod cart;
pub mod home;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog and detail views share one URL; `?id=` selects the view
        .route("/", get(home::show))
        .nest("/cart", cart_routes())
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the catalog source before returning OK. Returns 503 Service
/// Unavailable if the catalog cannot be loaded.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().load().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
