//! HTTP client for the remote product catalog.

use storefront_products::Product;
use thiserror::Error;

/// Failure modes of a catalog fetch.
///
/// Cloneable so a failed load can live inside a broadcast status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog endpoint returned status {0}")]
    Status(u16),
    #[error("malformed catalog payload: {0}")]
    Payload(String),
}

/// Client for fetching products from the catalog API.
///
/// The base URL is fixed at construction time (externally configured). Each
/// [`fetch_products`](CatalogClient::fetch_products) call re-fetches; callers
/// that want a loading/ready/failed view should go through
/// [`CatalogStatus`](crate::CatalogStatus).
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product list, order preserved as received.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = format!("{}/products", self.base_url);
        tracing::debug!(%url, "fetching product catalog");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog fetch rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let products: Vec<Product> = resp
            .json()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))?;

        tracing::debug!(count = products.len(), "catalog fetch succeeded");
        Ok(products)
    }
}
