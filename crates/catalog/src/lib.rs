//! `storefront-catalog`
//!
//! **Responsibility:** fetching the product list from the remote catalog API.
//!
//! This crate provides:
//! - An async HTTP client for the catalog endpoint
//! - The fetch failure taxonomy
//! - A tagged load state (loading / ready / failed) for consumers
//!
//! Every fetch is a fresh network call; there is no caching layer and no
//! retry. The API remains the authority for catalog contents.

pub mod client;
pub mod status;

pub use client::{CatalogClient, FetchError};
pub use status::{CatalogSnapshot, CatalogStatus};
