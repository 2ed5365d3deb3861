use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Failures raised by the category and expense services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested id is absent
    #[error("{0}")]
    NotFound(String),

    /// Category name collision
    #[error("{0}")]
    DuplicateName(String),

    #[error("{0}")]
    Validation(String),

    #[error("Record store error: {0}")]
    Store(#[from] DatabaseError),
}

impl ServiceError {
    pub fn category_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("Category not found with id: {}", id))
    }

    pub fn expense_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("Expense not found with id: {}", id))
    }
}
