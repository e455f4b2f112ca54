//! Single-writer owner of the cart snapshot.

use tokio::sync::watch;

use storefront_cart::Cart;
use storefront_products::{Product, ProductId};

/// Owns the current [`Cart`] snapshot and serializes all mutations.
///
/// Both mutation methods take `&mut self`: routing every change through one
/// owning store gives the single-writer discipline without a locking
/// primitive. Each mutation applies the pure cart operation, atomically
/// replaces the snapshot, and publishes the replacement to subscribers.
#[derive(Debug)]
pub struct CartStore {
    snapshot: Cart,
    tx: watch::Sender<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        let snapshot = Cart::new();
        let (tx, _rx) = watch::channel(snapshot.clone());
        Self { snapshot, tx }
    }

    /// The current snapshot.
    pub fn cart(&self) -> &Cart {
        &self.snapshot
    }

    /// Subscribe to snapshot replacements.
    ///
    /// The receiver starts at the latest snapshot; a UI-binding layer can
    /// await changes and re-render from whatever it observes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }

    /// Add one unit of `product` to the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "adding product to cart");
        self.replace(self.snapshot.add(product));
    }

    /// Remove one unit of the product identified by `product_id`.
    ///
    /// Unknown identifiers are a no-op, per the cart semantics.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        tracing::debug!(%product_id, "removing product from cart");
        self.replace(self.snapshot.remove(product_id));
    }

    fn replace(&mut self, next: Cart) {
        self.snapshot = next;
        self.tx.send_replace(self.snapshot.clone());
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
