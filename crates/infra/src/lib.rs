//! Infrastructure: where catalog snapshots come from.

pub mod catalog_source;

pub use catalog_source::{CatalogSource, InMemoryCatalog, JsonFileCatalog, LoadError, SharedCatalog};
