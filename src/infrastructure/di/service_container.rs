//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{CatalogLoader, StoreService};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::store::TomlDocumentStore;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding application settings and I/O dependencies.
///
/// Services are built on demand; a document-store handle lives only as long
/// as the service that owns it.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
        }
    }

    pub fn catalog_loader(&self) -> CatalogLoader {
        CatalogLoader::new(Arc::clone(&self.fs), self.settings.ingest.skip_header)
    }

    /// Open the configured document store.
    pub fn store_service(&self) -> ApplicationResult<StoreService> {
        let path = self
            .settings
            .store
            .path
            .as_deref()
            .ok_or_else(|| ApplicationError::Config {
                message: "store.path is not configured".into(),
            })?;
        let store = TomlDocumentStore::open(self.fs.as_ref(), path)?;
        Ok(StoreService::new(Arc::new(store)))
    }
}
