//! HTTP middleware for the storefront.

mod session;

pub use session::{SESSION_COOKIE_NAME, create_session_layer};
