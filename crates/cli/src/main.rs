//! Little Lemon CLI - Menu feed inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the menu feed and list every item
//! ll-cli fetch
//!
//! # Search the menu the way the app's home screen does
//! ll-cli search lemon
//! ll-cli search "" --category starters
//!
//! # List the category filter values
//! ll-cli categories
//! ```
//!
//! The feed endpoint and fees come from the environment; see
//! `little_lemon_ordering::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use little_lemon_ordering::catalog::MenuCatalog;
use little_lemon_ordering::menu::MenuClient;
use little_lemon_ordering::{AppConfig, AppError};

#[derive(Parser)]
#[command(name = "ll-cli")]
#[command(author, version, about = "Little Lemon CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the menu feed and list every item
    Fetch,
    /// Search the menu by phrase and optional category
    Search {
        /// Search phrase (matches title and description, case-insensitive)
        query: String,

        /// Restrict results to one category (exact match)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the distinct category labels in the feed
    Categories,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let client = MenuClient::new(&config)?;
    let catalog = MenuCatalog::new();
    client.refresh(&catalog).await?;

    match cli.command {
        Commands::Fetch => print_items(&catalog.all()),
        Commands::Search { query, category } => {
            print_items(&catalog.search(&query, category.as_deref()));
        }
        Commands::Categories => print_categories(&catalog),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_items(items: &[little_lemon_core::MenuItem]) {
    if items.is_empty() {
        println!("no matching items");
        return;
    }
    for item in items {
        println!(
            "{:>3}  {:<24} {:>8}  [{}]",
            item.id,
            item.title,
            item.base_price().to_string(),
            item.category
        );
    }
    println!("{} item(s)", items.len());
}

#[allow(clippy::print_stdout)]
fn print_categories(catalog: &MenuCatalog) {
    for category in catalog.categories() {
        println!("{category}");
    }
}
