use clap::Subcommand;

use crate::api::{CategoryDto, CategoryPayload};
use crate::cli::client::ApiClient;
use crate::cli::utils::{category_line, output, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum CategoryCommands {
    #[command(about = "List all categories")]
    List,

    #[command(about = "Create a category")]
    Add {
        #[arg(help = "Category name")]
        name: String,
    },

    #[command(about = "Show a category by id")]
    Show {
        #[arg(help = "Category ID")]
        id: String,
    },

    #[command(about = "Rename a category")]
    Rename {
        #[arg(help = "Category ID")]
        id: String,
        #[arg(help = "New name")]
        name: String,
    },

    #[command(about = "Delete a category")]
    Remove {
        #[arg(help = "Category ID")]
        id: String,
    },
}

pub async fn handle(cmd: CategoryCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        CategoryCommands::List => {
            let categories: Vec<CategoryDto> = client.get(&["categories"]).await?;
            output(output_format, &categories, |list| {
                if list.is_empty() {
                    println!("No categories");
                }
                for category in list {
                    println!("{}", category_line(category));
                }
            })
        }
        CategoryCommands::Add { name } => {
            let created: CategoryDto = client.post(&["categories"], &CategoryPayload { name }).await?;
            output(output_format, &created, |c| println!("Created {}", category_line(c)))
        }
        CategoryCommands::Show { id } => {
            let category: CategoryDto = client.get(&["categories", id.as_str()]).await?;
            output(output_format, &category, |c| println!("{}", category_line(c)))
        }
        CategoryCommands::Rename { id, name } => {
            let updated: CategoryDto = client.put(&["categories", id.as_str()], &CategoryPayload { name }).await?;
            output(output_format, &updated, |c| println!("Renamed {}", category_line(c)))
        }
        CategoryCommands::Remove { id } => {
            client.delete(&["categories", id.as_str()]).await?;
            output_success(output_format, &format!("Deleted category {}", id))
        }
    }
}
