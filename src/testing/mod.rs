use std::sync::Arc;

use async_trait::async_trait;

use crate::database::models::{Category, Expense};
use crate::database::store::{Document, RecordStore};
use crate::database::{DatabaseError, MemoryStore};
use crate::server::AppState;
use crate::services::{CategoryService, ExpenseService};

/// Record store whose every call fails as if the database were unreachable
pub struct FailingStore;

#[async_trait]
impl<T: Document> RecordStore<T> for FailingStore {
    async fn save(&self, _record: T) -> Result<T, DatabaseError> {
        Err(unreachable_store())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<T>, DatabaseError> {
        Err(unreachable_store())
    }

    async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        Err(unreachable_store())
    }

    async fn find_by_field(&self, _field: &str, _value: &str) -> Result<Vec<T>, DatabaseError> {
        Err(unreachable_store())
    }

    async fn exists_by_id(&self, _id: &str) -> Result<bool, DatabaseError> {
        Err(unreachable_store())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), DatabaseError> {
        Err(unreachable_store())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Err(unreachable_store())
    }
}

fn unreachable_store() -> DatabaseError {
    DatabaseError::ConnectionError("connection refused".to_string())
}

/// Application state backed by fresh in-memory collections
pub fn memory_state() -> AppState {
    AppState::new(
        CategoryService::new(Arc::new(MemoryStore::<Category>::new())),
        ExpenseService::new(Arc::new(MemoryStore::<Expense>::new())),
    )
}

/// Application state whose store always fails
pub fn failing_state() -> AppState {
    AppState::new(
        CategoryService::new(Arc::new(FailingStore)),
        ExpenseService::new(Arc::new(FailingStore)),
    )
}
