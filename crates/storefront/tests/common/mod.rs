//! Shared helpers for storefront integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;

use mercadito_storefront::config::{CatalogConfig, StorefrontConfig};
use mercadito_storefront::state::AppState;
use mercadito_storefront::{middleware, routes};

pub const TEST_PHONE: &str = "5215512345678";

pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        whatsapp_phone: TEST_PHONE.to_string(),
        catalog: CatalogConfig::Static,
    }
}

/// Build the full router with the static catalog and an in-memory
/// session store. Clone the router per request; clones share state.
pub fn app() -> Router {
    let config = test_config();
    let session_layer = middleware::create_session_layer(&config);
    let state = AppState::new(config);
    routes::routes().layer(session_layer).with_state(state)
}

/// Build a GET request, optionally carrying a session cookie.
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("valid request")
}

/// Build a form POST request, optionally carrying a session cookie.
pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(form.to_string()))
        .expect("valid request")
}

/// Collect the response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Extract the session cookie pair from a response, if one was set.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(ToString::to_string)
}

/// Extract the redirect target from a response.
pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)?
        .to_str()
        .ok()
        .map(ToString::to_string)
}
