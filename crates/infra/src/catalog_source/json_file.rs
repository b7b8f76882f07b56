use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use storefront_catalog::{CatalogSnapshot, Product};

use super::r#trait::{CatalogSource, LoadError};

/// Catalog stored as a JSON array of product records.
///
/// The file is read and parsed on every [`load`](CatalogSource::load), so edits
/// to the file are visible to the next request. Wrap it in
/// [`SharedCatalog`](super::SharedCatalog) to read it once instead.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<CatalogSnapshot, LoadError> {
        let started = Instant::now();

        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        super::warn_on_duplicate_ids(&products);
        tracing::debug!(
            path = %self.path.display(),
            products = products.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog loaded"
        );

        Ok(Arc::from(products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_PRODUCTS: &str = r#"[
        {"id": 1, "title": "Tee", "description": "Cotton", "category": "Shirts",
         "type": "T-Shirt", "color": "Red", "variants": ["S", "M"], "variantPrices": [19.99]},
        {"id": 2, "title": "Hoodie", "description": "Fleece", "category": "Outerwear",
         "type": "Hoodie", "color": "Black", "variants": [{"size": "L", "price": "49.00"}]}
    ]"#;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_products_in_file_order() {
        let file = write_catalog(TWO_PRODUCTS);
        let snapshot = JsonFileCatalog::new(file.path()).load().unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "Tee");
        assert_eq!(snapshot[1].min_price(), Some(49.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileCatalog::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "unexpected error: {err}");
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_catalog("{ not json");
        let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }), "unexpected error: {err}");
    }

    #[test]
    fn wrong_shape_is_reported() {
        let file = write_catalog(r#"[{"id": "one", "title": "Tee"}]"#);
        let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("malformed catalog"));
    }

    #[test]
    fn every_load_rereads_the_file() {
        let file = write_catalog("[]");
        let source = JsonFileCatalog::new(file.path());
        assert!(source.load().unwrap().is_empty());

        std::fs::write(file.path(), TWO_PRODUCTS).unwrap();
        assert_eq!(source.load().unwrap().len(), 2);
    }
}
