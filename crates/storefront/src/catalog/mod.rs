//! Product catalog loading.
//!
//! # Architecture
//!
//! - Two backends behind one contract: a fixed static table and a
//!   published spreadsheet CSV export fetched with `reqwest`
//! - Loaded once per process and cached via `tokio::sync::OnceCell`;
//!   repeated calls return the same `Arc<Catalog>` without re-fetching
//! - Fail-fast: a malformed row or an unreachable source fails the whole
//!   load, the storefront never renders a partial catalog

pub mod sheet;
mod static_data;

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use mercadito_core::Product;

use crate::config::CatalogConfig;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// HTTP fetch of the published export failed (network, timeout, or
    /// non-success status).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV payload could not be parsed (missing column, bad field type).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row is missing a required field.
    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    /// A price cell is not a non-negative decimal.
    #[error("row {row}: invalid price `{value}`")]
    InvalidPrice { row: usize, value: String },

    /// Two rows share the same product id.
    #[error("duplicate product id `{id}`")]
    DuplicateId { id: String },
}

/// The loaded catalog: an ordered, immutable product list.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from loaded products, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, DataSourceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(DataSourceError::DuplicateId {
                    id: product.id.to_string(),
                });
            }
        }
        Ok(Self { products })
    }

    /// Products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Session-cached catalog loader.
///
/// Cheaply cloneable via `Arc`; the first successful `load` pins the
/// catalog for the process lifetime. A failed load is not cached, so the
/// next request retries the source.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    config: CatalogConfig,
    client: reqwest::Client,
    loaded: OnceCell<Arc<Catalog>>,
}

impl CatalogService {
    /// Create a new catalog service for the configured backend.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogServiceInner {
                config,
                client: reqwest::Client::new(),
                loaded: OnceCell::new(),
            }),
        }
    }

    /// Load the catalog, fetching the source on first call only.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError` if the source is unreachable or any row
    /// is malformed. No partial catalog is ever returned.
    pub async fn load(&self) -> Result<Arc<Catalog>, DataSourceError> {
        let catalog = self
            .inner
            .loaded
            .get_or_try_init(|| self.fetch())
            .await?;
        Ok(Arc::clone(catalog))
    }

    async fn fetch(&self) -> Result<Arc<Catalog>, DataSourceError> {
        let products = match &self.inner.config {
            CatalogConfig::Static => static_data::products(),
            CatalogConfig::Sheet { url, fetch_timeout } => {
                sheet::fetch(&self.inner.client, url, *fetch_timeout).await?
            }
        };

        let catalog = Catalog::new(products)?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(Arc::new(catalog))
    }
}
