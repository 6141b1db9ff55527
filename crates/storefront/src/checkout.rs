//! WhatsApp checkout link builder.
//!
//! Checkout is a hand-off: the cart is formatted into a prefilled
//! message and the customer finishes the order in WhatsApp. Nothing is
//! submitted or persisted here.

use mercadito_core::CartItem;

/// Fixed first line of the checkout message.
pub const MESSAGE_PREFIX: &str = "Hola! Quiero pedir:";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Build a `wa.me` deep link for the given cart contents.
///
/// The message is the fixed prefix followed by one `- <name>` line per
/// item in cart order, percent-encoded as the `text` query parameter.
/// Deterministic: the same items and phone always produce the same link.
/// An empty cart yields a prefix-only message, still a well-formed URL.
#[must_use]
pub fn build_whatsapp_link(items: &[CartItem], phone: &str) -> String {
    let mut message = String::from(MESSAGE_PREFIX);
    for item in items {
        message.push_str("\n- ");
        message.push_str(&item.name);
    }

    format!(
        "{WHATSAPP_BASE_URL}/{phone}?text={}",
        urlencoding::encode(&message)
    )
}
