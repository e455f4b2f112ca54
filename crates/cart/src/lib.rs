//! Cart domain module.
//!
//! This crate contains the business rules for the shopping cart, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). State
//! changes are functional: every operation returns a new [`Cart`] snapshot.

pub mod cart;

pub use cart::{Cart, CartEntry};
