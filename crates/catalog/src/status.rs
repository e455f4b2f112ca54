//! Tagged load state for the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_products::Product;

use crate::client::FetchError;

/// A successfully fetched catalog, stamped with its fetch time.
///
/// Products keep the order the API returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Wrap a fetched product list, stamped with the current time.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fetched_at: Utc::now(),
        }
    }
}

/// Load state of the catalog.
///
/// The tagged rendition of the `{data, isLoading, error}` triple: exactly one
/// of the three holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    /// A fetch is in flight (or none has been started yet).
    Loading,
    /// The last fetch succeeded.
    Ready(CatalogSnapshot),
    /// The last fetch failed. Terminal until a new load is started.
    Failed(FetchError),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready(_))
    }

    /// The fetched products, if the last load succeeded.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            CatalogStatus::Ready(snapshot) => Some(&snapshot.products),
            _ => None,
        }
    }

    /// The fetch failure, if the last load failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            CatalogStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}
