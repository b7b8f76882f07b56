//! `storefront-core` — shared building blocks for the catalog service.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage).

pub mod error;
pub mod id;

pub use error::{QueryError, QueryResult};
pub use id::ProductId;
