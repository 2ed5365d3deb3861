use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::api::{ExpenseDto, ExpenseUpdate, NewExpense};
use crate::database::models::Expense;
use crate::database::store::RecordStore;
use crate::services::error::ServiceError;

/// Expense CRUD plus category-based queries
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn RecordStore<Expense>>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn RecordStore<Expense>>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<ExpenseDto>, ServiceError> {
        let expenses = self.store.find_all().await?;
        Ok(expenses.into_iter().map(ExpenseDto::from).collect())
    }

    /// Persist a new expense, dated today unless the request carries a date
    pub async fn create(&self, new: NewExpense) -> Result<ExpenseDto, ServiceError> {
        let expense = Expense {
            id: None,
            description: new.description,
            amount: new.amount,
            category: new.category,
            created_at: new.date.unwrap_or_else(|| Utc::now().date_naive()),
        };

        let saved = self.store.save(expense).await?;
        info!("Created expense {:?} in category {}", saved.id, saved.category);
        Ok(saved.into())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ExpenseDto, ServiceError> {
        debug!("Looking up expense {}", id);
        self.store
            .find_by_id(id)
            .await?
            .map(ExpenseDto::from)
            .ok_or_else(|| ServiceError::expense_not_found(id))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.exists_by_id(id).await?)
    }

    /// Replace description, amount and category; the creation date is kept
    pub async fn update(&self, id: &str, update: ExpenseUpdate) -> Result<ExpenseDto, ServiceError> {
        let mut expense = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::expense_not_found(id))?;

        expense.description = update.description;
        expense.amount = update.amount;
        expense.category = update.category;

        let saved = self.store.save(expense).await?;
        info!("Updated expense {}", id);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.exists(id).await? {
            return Err(ServiceError::expense_not_found(id));
        }
        self.store.delete_by_id(id).await?;
        info!("Deleted expense {}", id);
        Ok(())
    }

    /// Expenses whose category equals `category` exactly; empty when none match
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<ExpenseDto>, ServiceError> {
        let expenses = self.store.find_by_field("category", category).await?;
        Ok(expenses.into_iter().map(ExpenseDto::from).collect())
    }

    /// Category labels currently in use across all expenses, sorted
    pub async fn distinct_categories(&self) -> Result<Vec<String>, ServiceError> {
        let categories: BTreeSet<String> = self
            .store
            .find_all()
            .await?
            .into_iter()
            .map(|e| e.category)
            .collect();
        Ok(categories.into_iter().collect())
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.health_check().await?)
    }
}
