//! Local key-value storage
//!
//! The whole entry list lives under one key, read once at startup and
//! overwritten after every change.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::{FileKvStore, MemoryKvStore};
pub use models::LinkEntry;

/// String key-value store, modelled on browser local storage.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn KvStore>> {
        let store: Arc<dyn KvStore> = match config.backend {
            StorageBackend::File => {
                Arc::new(FileKvStore::new(config.resolved_data_dir()).await?)
            }
            StorageBackend::Memory => Arc::new(MemoryKvStore::new()),
        };
        info!("Using storage backend: {}", store.backend_name());
        Ok(store)
    }
}

/// Typed access to the persisted entry list.
#[derive(Clone)]
pub struct LinkRepository {
    store: Arc<dyn KvStore>,
    key: String,
}

impl LinkRepository {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored list.
    ///
    /// A missing key, `null`, or unparseable contents all load as an empty
    /// list; only the last one is worth a warning.
    pub async fn load(&self) -> Result<Vec<LinkEntry>> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            debug!("No stored links under key {}", self.key);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<LinkEntry>>>(&raw) {
            Ok(links) => {
                let links = links.unwrap_or_default();
                info!("Loaded {} links", links.len());
                Ok(links)
            }
            Err(e) => {
                warn!("Stored links under key {} are unreadable, starting empty: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the stored list with `links`.
    pub async fn save(&self, links: &[LinkEntry]) -> Result<()> {
        let json = serde_json::to_string(links)?;
        self.store.set_item(&self.key, &json).await?;
        debug!("Saved {} links under key {}", links.len(), self.key);
        Ok(())
    }
}
