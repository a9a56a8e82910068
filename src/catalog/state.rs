//! Catalog State Management
//!
//! This module manages the application state shared across requests: the
//! file-backed catalog store and its configured path.

use super::store::CatalogStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "products.json";

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state wrapping the catalog store.
pub struct AppState {
    /// Data-access layer over the catalog file.
    pub store: CatalogStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AppState {
    /// Creates state over an explicit catalog file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: CatalogStore::new(path),
        }
    }

    /// Creates state with the catalog path taken from `CATALOG_FILE`, or the
    /// default when unset.
    pub fn from_env() -> Self {
        let path = std::env::var("CATALOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_FILE));

        tracing::info!("using catalog file: {:?}", path);

        Self::new(path)
    }
}
