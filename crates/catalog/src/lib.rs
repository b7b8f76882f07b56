//! Catalog domain module.
//!
//! This crate holds the product data model and the query engine over an
//! in-memory catalog snapshot, implemented purely as deterministic logic
//! (no IO, no HTTP, no storage).

pub mod facets;
pub mod filter;
pub mod pagination;
pub mod params;
pub mod price;
pub mod product;
pub mod query;
pub mod search;

pub use facets::FacetKind;
pub use filter::ProductFilter;
pub use pagination::{Pagination, ResultEnvelope};
pub use params::QueryParameters;
pub use product::{CatalogSnapshot, PriceValue, Product, Variant};
