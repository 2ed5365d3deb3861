use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// A record persisted as a JSON document in a named collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (table) the documents live in
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    /// Identifier if one has been assigned; empty strings count as unassigned.
    fn assigned_id(&self) -> Option<&str> {
        self.id().filter(|id| !id.is_empty())
    }
}

/// Generic document collection keyed by opaque string ids.
///
/// Services receive an `Arc<dyn RecordStore<T>>` at construction so the
/// backend (memory, PostgreSQL, test doubles) is chosen by the caller.
#[async_trait]
pub trait RecordStore<T: Document>: Send + Sync {
    /// Insert a record without an id (one is assigned) or replace the record
    /// carrying the same id. Returns the stored record.
    async fn save(&self, record: T) -> Result<T, DatabaseError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DatabaseError>;

    /// All records in insertion order
    async fn find_all(&self) -> Result<Vec<T>, DatabaseError>;

    /// Records whose top-level `field` is a string exactly equal to `value`
    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DatabaseError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, DatabaseError>;

    /// Remove the record with `id`; absent ids are ignored.
    async fn delete_by_id(&self, id: &str) -> Result<(), DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Fresh opaque identifier for a new document
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

/// Exact string match of a top-level field in the serialized form of `record`
pub fn field_matches<T: Serialize>(record: &T, field: &str, value: &str) -> Result<bool, DatabaseError> {
    let doc = serde_json::to_value(record)?;
    Ok(doc.get(field).and_then(|v| v.as_str()) == Some(value))
}
