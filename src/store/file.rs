//! Load/save boundary for the JSON store file.
//!
//! The store is read-then-written with no locking: the tool is operated by a
//! single person via the scheduled job or the local admin app.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::StoreError;
use crate::store::Store;

/// Handle to the store file on disk.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file yields an empty store so the admin app
    /// works on a fresh checkout; malformed JSON is fatal and names the path.
    pub async fn load(&self) -> Result<Store, StoreError> {
        if !self.path.exists() {
            return Ok(Store::default());
        }
        let raw = fs::read_to_string(&self.path).await?;
        let store: Store = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        store.validate()?;
        info!(
            path = %self.path.display(),
            quotes = store.quotes.len(),
            poems = store.poems.len(),
            "Store loaded"
        );
        Ok(store)
    }

    /// Write the store back as pretty-printed JSON, creating parent
    /// directories as needed.
    pub async fn save(&self, store: &Store) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
