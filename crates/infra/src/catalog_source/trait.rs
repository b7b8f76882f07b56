use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use storefront_catalog::CatalogSnapshot;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only provider of catalog snapshots.
pub trait CatalogSource: Send + Sync {
    /// Returns the current catalog. Callers must treat the snapshot as immutable.
    fn load(&self) -> Result<CatalogSnapshot, LoadError>;
}

impl<S> CatalogSource for Arc<S>
where
    S: CatalogSource + ?Sized,
{
    fn load(&self) -> Result<CatalogSnapshot, LoadError> {
        (**self).load()
    }
}
