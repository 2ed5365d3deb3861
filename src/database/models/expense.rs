use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    /// Free-form label; not checked against the category collection
    pub category: String,
    /// Set once at creation, never changed by updates
    pub created_at: NaiveDate,
}

impl Document for Expense {
    const COLLECTION: &'static str = "expenses";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
