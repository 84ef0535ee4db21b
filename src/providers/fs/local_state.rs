use crate::{
    errors::{AppError, IOError},
    providers::{fs::path::get_local_state_file_path, local_state::LocalState},
};
use async_trait::async_trait;
use serde_json::{from_str, to_vec_pretty};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{read_to_string, write},
    sync::Mutex,
};

/// Key/value pairs kept in a single JSON object on disk.
pub struct FileSystemLocalState {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSystemLocalState {
    pub fn new(base_path: &Path) -> Self {
        Self {
            path: get_local_state_file_path(base_path),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = read_to_string(&self.path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        from_str(&content).map_err(|e| AppError::IO(IOError::from(e)))
    }

    async fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let bytes = to_vec_pretty(entries).map_err(|e| AppError::IO(IOError::from(e)))?;
        write(&self.path, bytes)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }
}

#[async_trait]
impl LocalState for FileSystemLocalState {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.store(&entries).await?;
        }
        Ok(())
    }
}
