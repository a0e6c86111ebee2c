//! # Catalog State
//!
//! Holds the browsing catalog. Favourite flags are the only thing that
//! changes after startup.

use std::sync::{Arc, Mutex};

use tiffin_core::Catalog;

use super::lock;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Wraps a catalog. `CatalogState::default()` uses the bundled data.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = lock(&self.catalog);
        f(&catalog)
    }

    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = lock(&self.catalog);
        f(&mut catalog)
    }
}
