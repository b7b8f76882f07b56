use std::sync::Arc;

use storefront_catalog::{CatalogSnapshot, Product};

use super::r#trait::{CatalogSource, LoadError};

/// Fixed in-memory catalog for tests/dev and embedding.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    snapshot: CatalogSnapshot,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        super::warn_on_duplicate_ids(&products);
        Self {
            snapshot: Arc::from(products),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<CatalogSnapshot, LoadError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_same_snapshot_every_time() {
        let source = InMemoryCatalog::new(vec![Product::new(1, "Tee", "Shirts", "Tee", "Red")]);
        let a = source.load().unwrap();
        let b = source.load().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 1);
    }
}
