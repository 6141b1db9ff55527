//! Cart route handlers.
//!
//! The cart lives in the session as an ordered list of product
//! snapshots. Mutations are plain form POSTs that redirect back to the
//! page the action came from; the next render picks up the new state.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use mercadito_core::Cart;

use crate::error::Result;
use crate::models::session::keys;
use crate::state::AppState;

/// Read the cart from the session, defaulting to empty.
pub async fn session_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Add a product snapshot to the session cart.
///
/// Appends without touching stock; the same product can appear multiple
/// times as separate entries. Redirects back to the detail view with the
/// confirmation flag set. Unknown or sold-out products are refused with
/// a plain redirect: the detail view never offers the form for them, so
/// landing here means a stale or forged request.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let catalog = state.catalog().load().await?;

    let Some(product) = catalog.find(&form.product_id) else {
        tracing::warn!(product_id = %form.product_id, "add to cart for unknown product");
        return Ok(Redirect::to("/").into_response());
    };

    if !product.in_stock() {
        tracing::warn!(product_id = %form.product_id, "add to cart for sold-out product");
        let detail = format!("/?id={}", urlencoding::encode(product.id.as_str()));
        return Ok(Redirect::to(&detail).into_response());
    }

    let mut cart = session_cart(&session).await?;
    cart.add(product);
    save_cart(&session, &cart).await?;
    tracing::debug!(product_id = %product.id, items = cart.len(), "item added to cart");

    let confirm = format!("/?id={}&added=1", urlencoding::encode(product.id.as_str()));
    Ok(Redirect::to(&confirm).into_response())
}

/// Empty the session cart and return to the catalog.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut cart = session_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;
    tracing::debug!("cart cleared");

    Ok(Redirect::to("/").into_response())
}
