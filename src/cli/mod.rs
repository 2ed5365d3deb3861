pub mod client;
pub mod commands;
pub mod utils;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use client::ApiClient;

/// Flags for the server binary; each one overrides the environment config
#[derive(Parser, Debug, Default)]
#[command(name = "expense-tracker")]
#[command(about = "Expense tracker API server")]
#[command(version)]
pub struct ServeArgs {
    #[arg(long, help = "Address to bind (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "PostgreSQL connection URL (overrides DATABASE_URL)")]
    pub database_url: Option<String>,

    #[arg(long, conflicts_with = "database_url", help = "Use the in-memory store even if DATABASE_URL is set")]
    pub memory: bool,
}

impl ServeArgs {
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = Some(url);
        }
        if self.memory {
            config.database.url = None;
        }
        config
    }
}

#[derive(Parser)]
#[command(name = "expense")]
#[command(about = "Command-line client for the expense tracker API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "API base URL (default: $EXPENSE_API_URL or http://127.0.0.1:3000)"
    )]
    pub url: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage categories")]
    Category {
        #[command(subcommand)]
        cmd: commands::category::CategoryCommands,
    },

    #[command(about = "Manage expenses")]
    Expense {
        #[command(subcommand)]
        cmd: commands::expense::ExpenseCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Args, Debug)]
pub struct ExpenseFields {
    #[arg(help = "What the money was spent on")]
    pub description: String,
    #[arg(allow_negative_numbers = true, help = "Amount spent")]
    pub amount: f64,
    #[arg(help = "Category label")]
    pub category: String,
}

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let base_url = cli
        .url
        .clone()
        .or_else(|| std::env::var("EXPENSE_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = ApiClient::new(base_url)?;

    match cli.command {
        Commands::Category { cmd } => commands::category::handle(cmd, &client, output_format).await,
        Commands::Expense { cmd } => commands::expense::handle(cmd, &client, output_format).await,
    }
}
