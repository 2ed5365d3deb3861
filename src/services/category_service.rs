use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::CategoryDto;
use crate::database::models::Category;
use crate::database::store::RecordStore;
use crate::services::error::ServiceError;

/// Category CRUD with unique, non-empty names
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn RecordStore<Category>>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn RecordStore<Category>>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<CategoryDto>, ServiceError> {
        let categories = self.store.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn create(&self, name: &str) -> Result<CategoryDto, ServiceError> {
        Self::validate_name(name)?;

        if self.find_by_name(name).await?.is_some() {
            warn!("Rejected duplicate category name: {}", name);
            return Err(ServiceError::DuplicateName(format!(
                "Category with name '{}' already exists.",
                name
            )));
        }

        let saved = self.store.save(Category::new(name)).await?;
        info!("Created category {:?} ({})", saved.id, saved.name);
        Ok(saved.into())
    }

    /// `None` when no category has this id
    pub async fn get_by_id(&self, id: &str) -> Result<Option<CategoryDto>, ServiceError> {
        debug!("Looking up category {}", id);
        Ok(self.store.find_by_id(id).await?.map(CategoryDto::from))
    }

    pub async fn update(&self, id: &str, name: &str) -> Result<CategoryDto, ServiceError> {
        let mut category = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::category_not_found(id))?;

        Self::validate_name(name)?;

        if let Some(other) = self.find_by_name(name).await? {
            if other.id.as_deref() != Some(id) {
                warn!("Rejected rename of category {} to taken name: {}", id, name);
                return Err(ServiceError::DuplicateName(format!(
                    "Another category with name '{}' already exists.",
                    name
                )));
            }
        }

        category.name = name.to_string();
        let saved = self.store.save(category).await?;
        info!("Updated category {} ({})", id, saved.name);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.exists_by_id(id).await? {
            return Err(ServiceError::category_not_found(id));
        }
        self.store.delete_by_id(id).await?;
        info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.health_check().await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, ServiceError> {
        let mut matches = self.store.find_by_field("name", name).await?;
        Ok(if matches.is_empty() { None } else { Some(matches.swap_remove(0)) })
    }

    fn validate_name(name: &str) -> Result<(), ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("Category name must not be empty".to_string()));
        }
        Ok(())
    }
}
