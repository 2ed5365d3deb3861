pub mod dto;

pub use dto::{CategoryDto, CategoryPayload, ExpenseDto, ExpenseUpdate, NewExpense};
