//! Drives catalog fetches and publishes load-state transitions.

use tokio::sync::watch;

use storefront_catalog::{CatalogClient, CatalogSnapshot, CatalogStatus};

/// Owns the catalog load state for a session.
///
/// Each [`load`](CatalogLoader::load) call re-fetches from the remote source
/// (no caching, no retry) and publishes `Loading` followed by `Ready` or
/// `Failed` to subscribers. A failed load stays failed until the next
/// explicit `load`; the cart never depends on any of this.
#[derive(Debug)]
pub struct CatalogLoader {
    client: CatalogClient,
    tx: watch::Sender<CatalogStatus>,
}

impl CatalogLoader {
    pub fn new(client: CatalogClient) -> Self {
        let (tx, _rx) = watch::channel(CatalogStatus::Loading);
        Self { client, tx }
    }

    /// The current load state.
    pub fn status(&self) -> CatalogStatus {
        self.tx.borrow().clone()
    }

    /// Subscribe to load-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<CatalogStatus> {
        self.tx.subscribe()
    }

    /// Fetch the catalog once, suspending until the remote call resolves.
    ///
    /// Returns the terminal status of this load (`Ready` or `Failed`).
    pub async fn load(&self) -> CatalogStatus {
        self.tx.send_replace(CatalogStatus::Loading);

        let status = match self.client.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                CatalogStatus::Ready(CatalogSnapshot::new(products))
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                CatalogStatus::Failed(err)
            }
        };

        self.tx.send_replace(status.clone());
        status
    }
}
