//! Per-user session: catalog state, cart state, and the view surface.

use storefront_cart::Cart;
use storefront_catalog::{CatalogClient, CatalogStatus};
use storefront_products::{Product, ProductId};

use crate::loader::CatalogLoader;
use crate::store::CartStore;

/// One user's storefront session.
///
/// Owns the catalog loader and the cart store; the rendering layer talks to
/// the session and nothing else. Catalog loading and cart mutation are
/// independent: the cart stays usable whatever the catalog load state is.
#[derive(Debug)]
pub struct Session {
    loader: CatalogLoader,
    store: CartStore,
    cart_open: bool,
}

impl Session {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            loader: CatalogLoader::new(client),
            store: CartStore::new(),
            cart_open: false,
        }
    }

    /// Fetch the catalog, returning the terminal status of this load.
    pub async fn load_catalog(&self) -> CatalogStatus {
        self.loader.load().await
    }

    /// Current catalog load state.
    pub fn catalog(&self) -> CatalogStatus {
        self.loader.status()
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Resolve a catalog product by id.
    ///
    /// Returns `None` while the catalog is not ready, or when the id is not
    /// in the fetched list.
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.loader
            .status()
            .products()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.store.add_to_cart(product);
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.store.remove_from_cart(product_id);
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> &Cart {
        self.store.cart()
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Snapshot of everything a rendering layer needs for one frame.
    pub fn view(&self) -> SessionView {
        let cart = self.store.cart().clone();
        SessionView {
            catalog: self.loader.status(),
            badge_count: cart.total_items(),
            cart_total: cart.total_price(),
            cart,
            cart_open: self.cart_open,
        }
    }
}

/// Render-ready projection of the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub catalog: CatalogStatus,
    pub cart: Cart,
    /// Total units in the cart (the badge over the cart button).
    pub badge_count: u64,
    /// Running total over all cart lines.
    pub cart_total: f64,
    pub cart_open: bool,
}
