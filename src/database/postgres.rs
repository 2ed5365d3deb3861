use async_trait::async_trait;
use sqlx::{postgres::PgRow, types::Json, PgPool, Row};

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::store::{new_document_id, Document, RecordStore};

/// Document collection stored as JSONB rows in a PostgreSQL table
pub struct PgDocumentStore<T> {
    table: String,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Document> PgDocumentStore<T> {
    /// Bind to the collection table for `T`, creating it if needed
    pub async fn new(pool: PgPool) -> Result<Self, DatabaseError> {
        DatabaseManager::ensure_collection(&pool, T::COLLECTION).await?;
        Ok(Self {
            table: DatabaseManager::quote_identifier(T::COLLECTION)?,
            pool,
            _phantom: std::marker::PhantomData,
        })
    }

    fn decode(row: PgRow) -> Result<T, DatabaseError> {
        let Json(doc): Json<T> = row.try_get("doc")?;
        Ok(doc)
    }

    fn decode_all(rows: Vec<PgRow>) -> Result<Vec<T>, DatabaseError> {
        rows.into_iter().map(Self::decode).collect()
    }
}

#[async_trait]
impl<T: Document> RecordStore<T> for PgDocumentStore<T> {
    async fn save(&self, mut record: T) -> Result<T, DatabaseError> {
        let id = match record.assigned_id() {
            Some(id) => id.to_string(),
            None => {
                let id = new_document_id();
                record.set_id(id.clone());
                id
            }
        };

        let sql = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc",
            self.table
        );
        sqlx::query(&sql)
            .bind(&id)
            .bind(Json(&record))
            .execute(&self.pool)
            .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", self.table);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(Self::decode).transpose()
    }

    async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT doc FROM {} ORDER BY seq", self.table);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Self::decode_all(rows)
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DatabaseError> {
        let sql = format!(
            "SELECT doc FROM {} WHERE doc ->> $1 = $2 ORDER BY seq",
            self.table
        );
        let rows = sqlx::query(&sql)
            .bind(field)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Self::decode_all(rows)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", self.table);
        let (exists,): (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::config::AppConfig;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Label {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        name: String,
    }

    impl Label {
        fn new(name: &str) -> Self {
            Self { id: None, name: name.to_string() }
        }
    }

    impl Document for Label {
        const COLLECTION: &'static str = "store_test_labels";

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    /// Store on a live database named by TEST_DATABASE_URL, emptied first.
    /// `None` when the variable is unset.
    async fn live_store() -> Option<PgDocumentStore<Label>> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = DatabaseManager::connect(&url, &AppConfig::default().database)
            .await
            .expect("connect to TEST_DATABASE_URL");
        let store = PgDocumentStore::<Label>::new(pool).await.expect("create collection");
        sqlx::query(&format!("DELETE FROM {}", store.table))
            .execute(&store.pool)
            .await
            .expect("clear collection");
        Some(store)
    }

    // One test so the shared table is never used concurrently
    #[tokio::test]
    async fn postgres_store_behaves_like_memory_store() {
        let Some(store) = live_store().await else {
            eprintln!("TEST_DATABASE_URL not set; skipping PostgreSQL store test");
            return;
        };

        store.health_check().await.unwrap();

        // ids are assigned and insertion order is kept
        let mut food = store.save(Label::new("Food")).await.unwrap();
        let travel = store.save(Label::new("Travel")).await.unwrap();
        assert!(food.assigned_id().is_some());
        assert_ne!(food.id, travel.id);

        // saving an existing id replaces in place
        food.name = "Groceries".to_string();
        store.save(food.clone()).await.unwrap();
        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![food.clone(), travel.clone()]);

        // field lookup is exact and case-sensitive
        assert_eq!(store.find_by_field("name", "Travel").await.unwrap(), vec![travel.clone()]);
        assert!(store.find_by_field("name", "travel").await.unwrap().is_empty());
        assert!(store.find_by_field("missing", "Travel").await.unwrap().is_empty());

        // empty id counts as unassigned
        let mut blank = Label::new("Rent");
        blank.id = Some(String::new());
        let rent = store.save(blank).await.unwrap();
        assert!(rent.assigned_id().is_some());

        let id = travel.id.clone().unwrap();
        assert!(store.exists_by_id(&id).await.unwrap());
        assert_eq!(store.find_by_id(&id).await.unwrap(), Some(travel));
        store.delete_by_id(&id).await.unwrap();
        assert!(!store.exists_by_id(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());
        store.delete_by_id(&id).await.unwrap();

        let names: Vec<_> = store.find_all().await.unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Groceries", "Rent"]);
    }
}
