use serde::{Deserialize, Serialize};

use storefront_products::{Product, ProductId};

/// Cart line: a product plus the amount the user intends to purchase.
///
/// Entries are only created through [`Cart::add`], so `amount` is always at
/// least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    product: Product,
    amount: u32,
}

impl CartEntry {
    fn first(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Price of this line: unit price times amount.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Ordered collection of cart entries for the current session.
///
/// A `Cart` is an immutable snapshot: the two mutation operations return a new
/// snapshot and leave `self` untouched. At most one entry exists per product
/// identifier; new products are appended at the end, existing entries keep
/// their position when their amount changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing entry's amount when the product is already in
    /// the cart; otherwise appends a new entry with amount 1.
    #[must_use]
    pub fn add(&self, product: Product) -> Cart {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => entry.amount += 1,
            None => entries.push(CartEntry::first(product)),
        }
        Cart { entries }
    }

    /// Remove one unit of the product identified by `product_id`.
    ///
    /// Decrements the matching entry's amount, dropping the entry entirely
    /// when its amount would reach 0. Non-matching entries are carried over
    /// unchanged, relative order preserved. Removing an identifier that is
    /// not in the cart returns an equivalent snapshot.
    #[must_use]
    pub fn remove(&self, product_id: ProductId) -> Cart {
        let mut entries = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.product.id == product_id {
                if entry.amount > 1 {
                    entries.push(CartEntry {
                        product: entry.product.clone(),
                        amount: entry.amount - 1,
                    });
                }
            } else {
                entries.push(entry.clone());
            }
        }
        Cart { entries }
    }

    /// Total number of units across all entries (the badge count).
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.amount)).sum()
    }

    /// Running total over all lines.
    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}
