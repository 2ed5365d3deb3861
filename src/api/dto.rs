//! Transport forms of categories and expenses, as exchanged over HTTP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{Category, Expense};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
}

/// Body of category create and update requests. Any `id` sent along is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDto {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// Body of an expense create request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    /// Defaults to the current date when omitted
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Body of an expense update request. The stored date is kept as is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.unwrap_or_default(),
            name: category.name,
        }
    }
}

impl From<Expense> for ExpenseDto {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.unwrap_or_default(),
            description: expense.description,
            amount: expense.amount,
            category: expense.category,
            date: expense.created_at,
        }
    }
}
