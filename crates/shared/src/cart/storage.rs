use crate::{abstract_trait::CartStorage, errors::CartError};
use async_trait::async_trait;
use std::{collections::HashMap, io::ErrorKind, path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};

/// Process-local storage; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStorage for MemoryCartStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl CartStorage for FileCartStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CartError::Storage(err.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CartError::Storage(e.to_string()))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .await
            .map_err(|e| CartError::Storage(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| CartError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_storage_round_trips_and_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("cart").await.unwrap(), None);

        storage.set("cart", "[]").await.unwrap();
        assert_eq!(storage.get("cart").await.unwrap().as_deref(), Some("[]"));
    }
}
