pub mod category_service;
pub mod error;
pub mod expense_service;

pub use category_service::CategoryService;
pub use error::ServiceError;
pub use expense_service::ExpenseService;
