use std::sync::OnceLock;

use storefront_catalog::CatalogSnapshot;

use super::r#trait::{CatalogSource, LoadError};

/// Loads an inner source once and shares the snapshot with every caller.
///
/// A failed load is not cached; the next call tries again.
#[derive(Debug)]
pub struct SharedCatalog<S> {
    inner: S,
    snapshot: OnceLock<CatalogSnapshot>,
}

impl<S: CatalogSource> SharedCatalog<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            snapshot: OnceLock::new(),
        }
    }

    /// Builds the source and loads it immediately, surfacing load errors up front.
    pub fn preload(inner: S) -> Result<Self, LoadError> {
        let shared = Self::new(inner);
        shared.load()?;
        Ok(shared)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }
}

impl<S: CatalogSource> CatalogSource for SharedCatalog<S> {
    fn load(&self) -> Result<CatalogSnapshot, LoadError> {
        if let Some(snapshot) = self.snapshot.get() {
            return Ok(snapshot.clone());
        }
        let loaded = self.inner.load()?;
        // Concurrent first loads may race; whichever lands first is kept.
        Ok(self.snapshot.get_or_init(|| loaded).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use storefront_catalog::Product;

    /// Counts loads and fails until `fail_first` attempts have been made.
    struct CountingSource {
        loads: AtomicUsize,
        fail_first: usize,
    }

    impl CountingSource {
        fn new(fail_first: usize) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                fail_first,
            }
        }
    }

    impl CatalogSource for CountingSource {
        fn load(&self) -> Result<CatalogSnapshot, LoadError> {
            let n = self.loads.fetch_add(1, Ordering::SeqCst);
            if n < self.fail_first {
                return Err(LoadError::Unavailable("not yet".to_string()));
            }
            Ok(Arc::from(vec![Product::new(1, "Tee", "Shirts", "Tee", "Red")]))
        }
    }

    #[test]
    fn loads_inner_source_once() {
        let inner = Arc::new(CountingSource::new(0));
        let shared = SharedCatalog::new(inner.clone());

        let a = shared.load().unwrap();
        let b = shared.load().unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(inner.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_retried() {
        let inner = Arc::new(CountingSource::new(1));
        let shared = SharedCatalog::new(inner.clone());

        assert!(shared.load().is_err());
        assert!(!shared.is_loaded());
        assert_eq!(shared.load().unwrap().len(), 1);
        assert_eq!(inner.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn preload_surfaces_errors() {
        assert!(SharedCatalog::preload(CountingSource::new(1)).is_err());

        let shared = SharedCatalog::preload(CountingSource::new(0)).unwrap();
        assert!(shared.is_loaded());
    }
}
