//! Product data model shared by the catalog client and the cart.
//!
//! This crate contains **pure data** types only (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductId};
