use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::KeyValueStore;
use crate::errors::AppError;

pub const STORAGE_PATH: &str = "./.instance/contact.json";

/// Key-value store kept as one JSON object (string to string) in a file.
/// Each `set_item` re-reads the object, replaces the one key, and writes the
/// whole object back; keys stay independent and there is no cross-key
/// atomicity, only last-write-wins per key.
pub struct JsonFileStore {
    pub path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("STORAGE_PATH").unwrap_or(STORAGE_PATH.to_string()))
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.path, serde_json::to_string(entries)?).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }
}
