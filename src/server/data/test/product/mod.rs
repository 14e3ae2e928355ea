use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use std::sync::{Arc, Mutex};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    service::product::ProductService,
    storage::{ObjectStorage, StorageError},
};

mod delete_deep;
mod get_with_variants;

/// Object store double that records every deleted key.
struct RecordingStorage {
    deleted: Arc<Mutex<Vec<String>>>,
}

impl RecordingStorage {
    fn new() -> (Arc<Self>, Arc<Mutex<Vec<String>>>) {
        let deleted = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self {
                deleted: deleted.clone(),
            }),
            deleted,
        )
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put(&self, _: &str, _: Vec<u8>, _: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        Ok(format!("https://cdn.test/{key}"))
    }
}

/// Object store double whose deletes always fail.
struct FailingStorage;

#[async_trait]
impl ObjectStorage for FailingStorage {
    async fn put(&self, _: &str, _: Vec<u8>, _: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::RequestFailed {
            key: key.to_string(),
            status: 500,
        })
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        Ok(format!("https://cdn.test/{key}"))
    }
}
