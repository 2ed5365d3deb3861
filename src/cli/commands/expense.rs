use chrono::NaiveDate;
use clap::Subcommand;

use crate::api::{ExpenseDto, ExpenseUpdate, NewExpense};
use crate::cli::client::ApiClient;
use crate::cli::utils::{expense_line, output, output_success};
use crate::cli::{ExpenseFields, OutputFormat};

#[derive(Subcommand)]
pub enum ExpenseCommands {
    #[command(about = "List all expenses")]
    List,

    #[command(about = "Record an expense")]
    Add {
        #[command(flatten)]
        fields: ExpenseFields,
        #[arg(long, help = "Date as YYYY-MM-DD (defaults to today on the server)")]
        date: Option<NaiveDate>,
    },

    #[command(about = "Show an expense by id")]
    Show {
        #[arg(help = "Expense ID")]
        id: String,
    },

    #[command(about = "Replace description, amount and category of an expense")]
    Edit {
        #[arg(help = "Expense ID")]
        id: String,
        #[command(flatten)]
        fields: ExpenseFields,
    },

    #[command(about = "Delete an expense")]
    Remove {
        #[arg(help = "Expense ID")]
        id: String,
    },

    #[command(about = "List expenses in a category")]
    ByCategory {
        #[arg(help = "Category label")]
        category: String,
    },

    #[command(about = "List category labels used by expenses")]
    Categories,
}

fn print_expenses(list: &[ExpenseDto]) {
    if list.is_empty() {
        println!("No expenses");
    }
    for expense in list {
        println!("{}", expense_line(expense));
    }
}

pub async fn handle(cmd: ExpenseCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ExpenseCommands::List => {
            let expenses: Vec<ExpenseDto> = client.get(&["expenses"]).await?;
            output(output_format, &expenses, |list| print_expenses(list))
        }
        ExpenseCommands::Add { fields, date } => {
            let body = NewExpense {
                description: fields.description,
                amount: fields.amount,
                category: fields.category,
                date,
            };
            let created: ExpenseDto = client.post(&["expenses"], &body).await?;
            output(output_format, &created, |e| println!("Created {}", expense_line(e)))
        }
        ExpenseCommands::Show { id } => {
            let expense: ExpenseDto = client.get(&["expenses", id.as_str()]).await?;
            output(output_format, &expense, |e| println!("{}", expense_line(e)))
        }
        ExpenseCommands::Edit { id, fields } => {
            let body = ExpenseUpdate {
                description: fields.description,
                amount: fields.amount,
                category: fields.category,
            };
            let updated: ExpenseDto = client.put(&["expenses", id.as_str()], &body).await?;
            output(output_format, &updated, |e| println!("Updated {}", expense_line(e)))
        }
        ExpenseCommands::Remove { id } => {
            client.delete(&["expenses", id.as_str()]).await?;
            output_success(output_format, &format!("Deleted expense {}", id))
        }
        ExpenseCommands::ByCategory { category } => {
            let expenses: Vec<ExpenseDto> = client.get(&["expenses", "category", category.as_str()]).await?;
            output(output_format, &expenses, |list| print_expenses(list))
        }
        ExpenseCommands::Categories => {
            let categories: Vec<String> = client.get(&["expenses", "categories"]).await?;
            output(output_format, &categories, |list| {
                for name in list {
                    println!("{}", name);
                }
            })
        }
    }
}
