use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::errors::AppError;

/// Key-value store that forgets everything on drop. Backs the `mem` storage
/// choice and most tests.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.data.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
