//! Catalog loading.
//!
//! A [`CatalogSource`] produces an immutable [`CatalogSnapshot`]. Sources can be
//! read fresh on every call ([`JsonFileCatalog`]) or loaded once and shared
//! ([`SharedCatalog`]); query code cannot tell the difference.

pub mod in_memory;
pub mod json_file;
pub mod shared;
pub mod r#trait;

pub use in_memory::InMemoryCatalog;
pub use json_file::JsonFileCatalog;
pub use shared::SharedCatalog;
pub use r#trait::{CatalogSource, LoadError};

use std::collections::HashSet;

use storefront_catalog::Product;

/// Logs every id that appears more than once. Lookups return the first record.
pub(crate) fn warn_on_duplicate_ids(products: &[Product]) {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            tracing::warn!(product_id = %product.id, "duplicate product id in catalog; first record wins");
        }
    }
}
