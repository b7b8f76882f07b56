use std::sync::Arc;

use storefront_catalog::CatalogSnapshot;
use storefront_infra::{CatalogSource, JsonFileCatalog, LoadError, SharedCatalog};

use crate::config::{ApiConfig, ReloadPolicy};

/// Request-facing access to the catalog.
///
/// Handlers ask for a snapshot per request and never hold on to it; the
/// configured source decides whether that means a fresh file read or a shared,
/// already-loaded catalog.
#[derive(Clone)]
pub struct CatalogServices {
    source: Arc<dyn CatalogSource>,
}

impl CatalogServices {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Wires the JSON file source according to the reload policy. With
    /// [`ReloadPolicy::Once`] the file is read here, so a broken catalog
    /// fails startup instead of the first request.
    pub fn from_config(config: &ApiConfig) -> Result<Self, LoadError> {
        let file = JsonFileCatalog::new(&config.catalog_path);
        match config.reload {
            ReloadPolicy::PerRequest => Ok(Self::new(file)),
            ReloadPolicy::Once => Ok(Self::new(SharedCatalog::preload(file)?)),
        }
    }

    /// Current catalog snapshot. File reads run on the blocking pool.
    pub async fn snapshot(&self) -> Result<CatalogSnapshot, LoadError> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| LoadError::Unavailable(e.to_string()))?
    }
}
