use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::store::{field_matches, new_document_id, Document, RecordStore};

/// In-process document collection. Used when no database is configured.
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Document> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Document> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> RecordStore<T> for MemoryStore<T> {
    async fn save(&self, mut record: T) -> Result<T, DatabaseError> {
        let mut records = self.records.write().await;

        let id = match record.assigned_id() {
            Some(id) => id.to_string(),
            None => {
                let id = new_document_id();
                record.set_id(id.clone());
                id
            }
        };

        match records.iter_mut().find(|r| r.id() == Some(id.as_str())) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DatabaseError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DatabaseError> {
        let records = self.records.read().await;
        let mut matched = Vec::new();
        for record in records.iter() {
            if field_matches(record, field, value)? {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DatabaseError> {
        let records = self.records.read().await;
        Ok(records.iter().any(|r| r.id() == Some(id)))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DatabaseError> {
        let mut records = self.records.write().await;
        records.retain(|r| r.id() != Some(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Category;

    #[tokio::test]
    async fn save_assigns_id_and_preserves_order() {
        let store = MemoryStore::<Category>::new();
        let a = store.save(Category::new("Food")).await.unwrap();
        let b = store.save(Category::new("Travel")).await.unwrap();

        assert!(a.assigned_id().is_some());
        assert_ne!(a.id, b.id);

        let all = store.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Travel"]);
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces_in_place() {
        let store = MemoryStore::<Category>::new();
        let mut food = store.save(Category::new("Food")).await.unwrap();
        store.save(Category::new("Travel")).await.unwrap();

        food.name = "Groceries".to_string();
        store.save(food.clone()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Groceries");
        assert_eq!(all[0].id, food.id);
    }

    #[tokio::test]
    async fn empty_id_counts_as_unassigned() {
        let store = MemoryStore::<Category>::new();
        let mut category = Category::new("Food");
        category.id = Some(String::new());

        let saved = store.save(category).await.unwrap();
        assert!(saved.assigned_id().is_some());
    }

    #[tokio::test]
    async fn find_by_field_is_exact_and_case_sensitive() {
        let store = MemoryStore::<Category>::new();
        store.save(Category::new("Food")).await.unwrap();

        assert_eq!(store.find_by_field("name", "Food").await.unwrap().len(), 1);
        assert!(store.find_by_field("name", "food").await.unwrap().is_empty());
        assert!(store.find_by_field("missing", "Food").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exists_and_delete() {
        let store = MemoryStore::<Category>::new();
        let saved = store.save(Category::new("Food")).await.unwrap();
        let id = saved.id.clone().unwrap();

        assert!(store.exists_by_id(&id).await.unwrap());
        store.delete_by_id(&id).await.unwrap();
        assert!(!store.exists_by_id(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());

        // deleting again is a no-op
        store.delete_by_id(&id).await.unwrap();
    }
}
