//! File-backed storage backend

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::storage::KeyValueStorage;

/// File-backed key-value store: one UTF-8 JSON file per collection key
/// under a data directory.
///
/// This is the on-device substrate. Writes are whole-file overwrites
/// with no atomicity guarantee, matching the single-writer usage model.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open a file store rooted at `root`, creating the directory if it
    /// does not exist yet.
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Open the file store described by the application configuration.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        Self::open(&config.data_dir).await
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}
