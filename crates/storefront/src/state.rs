//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration and the cached
/// catalog loader; the cart is per-session and lives in the session
/// layer, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogService,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogService::new(config.catalog.clone());

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }
}
