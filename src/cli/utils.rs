use serde::Serialize;

use crate::api::{CategoryDto, ExpenseDto};
use crate::cli::OutputFormat;

/// Print `value` as pretty JSON, or hand it to `text` for human output
pub fn output<T: Serialize>(
    output_format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "message": message }))?);
        }
        OutputFormat::Text => println!("✓ {}", message),
    }
    Ok(())
}

pub fn category_line(category: &CategoryDto) -> String {
    format!("{}  {}", category.id, category.name)
}

pub fn expense_line(expense: &ExpenseDto) -> String {
    format!(
        "{}  {}  {:>10.2}  {:<16}  {}",
        expense.id, expense.date, expense.amount, expense.category, expense.description
    )
}
