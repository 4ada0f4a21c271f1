pub mod json;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use clap::ValueEnum;

use crate::errors::AppError;

pub use json::JsonFileStore;
pub use memory::MemStore;

/// Durable string key-value storage. Any store that can fetch and overwrite
/// one string per key satisfies the card; keys are independent of each other
/// and writes are last-write-wins per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set_item(key, value).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageChoice {
    Mem,
    Json,
}

pub fn parse_store(choice: StorageChoice) -> Box<dyn KeyValueStore> {
    match choice {
        StorageChoice::Mem => Box::new(MemStore::new()),
        StorageChoice::Json => Box::new(JsonFileStore::from_env()),
    }
}
