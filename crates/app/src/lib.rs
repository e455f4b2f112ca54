//! `storefront-app`
//!
//! **Responsibility:** the owning shell around the catalog and the cart.
//!
//! This crate provides:
//! - The single-writer cart state owner ([`CartStore`])
//! - The catalog load driver ([`CatalogLoader`])
//! - The per-user [`Session`] and its render-ready view
//!
//! Rendering itself lives outside; the terminal front end in `main.rs` is the
//! reference consumer of the session surface.

pub mod loader;
pub mod session;
pub mod store;
pub mod telemetry;

pub use loader::CatalogLoader;
pub use session::{Session, SessionView};
pub use store::CartStore;
