//! CLI administration tool for the book & URL service.
//!
//! Talks to the database directly through the same services the HTTP API
//! uses, without requiring the server to run.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Books
//! cargo run --bin admin -- books list
//! cargo run --bin admin -- books add --author "Frank Herbert" --title Dune --publisher "Chilton Books"
//! cargo run --bin admin -- books delete 3
//!
//! # URLs
//! cargo run --bin admin -- urls list
//! cargo run --bin admin -- urls add https://example.com
//! cargo run --bin admin -- urls resolve 9f86d081884c7d659a2feaa0c55ad015
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use book_url_service::api::dto::book::CreateBookRequest;
use book_url_service::api::dto::url::AddUrlRequest;
use book_url_service::application::services::{BookService, UrlService};
use book_url_service::domain::entities::NewBook;
use book_url_service::infrastructure::persistence::{PgBookRepository, PgUrlRepository};
use book_url_service::{config, server};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing the book & URL service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage books
    Books {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Manage URL mappings
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum BookAction {
    /// List all books
    List,

    /// Add a book
    Add {
        #[arg(short, long)]
        author: String,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        publisher: String,
    },

    /// Delete a book by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UrlAction {
    /// List all URL mappings
    List,

    /// Shorten a long URL (returns the existing code if already mapped)
    Add { long_url: String },

    /// Resolve a short code
    Resolve { short_url: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Books { action } => handle_book_action(action, &pool).await?,
        Commands::Urls { action } => handle_url_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn book_service(pool: &PgPool) -> BookService<PgBookRepository> {
    BookService::new(Arc::new(PgBookRepository::new(Arc::new(pool.clone()))))
}

fn url_service(pool: &PgPool) -> UrlService<PgUrlRepository> {
    UrlService::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))))
}

/// Applies the same presence checks as `POST /api/create_books`.
fn new_book_from_args(author: String, title: String, publisher: String) -> Result<NewBook> {
    let request = CreateBookRequest {
        author,
        title,
        publisher,
    };
    request.validate().context("invalid book")?;

    Ok(request.into())
}

/// Applies the same presence check as `POST /api/addurl`.
fn long_url_from_arg(long_url: String) -> Result<String> {
    let request = AddUrlRequest { long_url };
    request.validate().context("invalid long URL")?;

    Ok(request.long_url)
}

/// Dispatches book commands.
async fn handle_book_action(action: BookAction, pool: &PgPool) -> Result<()> {
    let service = book_service(pool);

    match action {
        BookAction::List => {
            println!("{}", "Books".bright_blue().bold());
            println!();

            let books = service.list_books().await?;

            if books.is_empty() {
                println!("{}", "  No books found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<30} {:<24} {}",
                "ID".bright_white().bold(),
                "Title".bright_white().bold(),
                "Author".bright_white().bold(),
                "Publisher".bright_white().bold()
            );
            println!("  {}", "-".repeat(80).bright_black());

            for book in &books {
                println!(
                    "  {:<6} {:<30} {:<24} {}",
                    book.id.to_string().bright_black(),
                    book.title.cyan(),
                    book.author,
                    book.publisher.bright_black()
                );
            }

            println!();
            println!("  Total: {}", books.len().to_string().bright_white().bold());
        }
        BookAction::Add {
            author,
            title,
            publisher,
        } => {
            let new_book = new_book_from_args(author, title, publisher)?;
            let book = service.create_book(new_book).await?;

            println!(
                "{} {} (id {})",
                "Book added:".green().bold(),
                book.title.cyan(),
                book.id
            );
        }
        BookAction::Delete { id, yes } => {
            let book = service.get_book(&id).await?;

            println!("  Title:  {}", book.title.cyan());
            println!("  Author: {}", book.author);
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this book?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            service.delete_book(&id).await?;

            println!("{}", "Book deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches URL commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let service = url_service(pool);

    match action {
        UrlAction::List => {
            println!("{}", "URL mappings".bright_blue().bold());
            println!();

            let urls = service.list_urls().await?;

            if urls.is_empty() {
                println!("{}", "  No URLs found".yellow());
                return Ok(());
            }

            for mapping in &urls {
                println!(
                    "  {:<6} {}  {}",
                    mapping.id.to_string().bright_black(),
                    mapping.short_url.bright_yellow(),
                    mapping.long_url
                );
            }

            println!();
            println!("  Total: {}", urls.len().to_string().bright_white().bold());
        }
        UrlAction::Add { long_url } => {
            let long_url = long_url_from_arg(long_url)?;
            let outcome = service.add_url(long_url).await?;

            let label = if outcome.is_created() {
                "Created:".green().bold()
            } else {
                "Already mapped:".yellow().bold()
            };

            let mapping = outcome.mapping();
            println!(
                "{} {} -> {}",
                label,
                mapping.short_url.bright_yellow(),
                mapping.long_url
            );
        }
        UrlAction::Resolve { short_url } => {
            let mapping = service.get_by_short_url(&short_url).await?;
            println!("{}", mapping.long_url);
        }
    }

    Ok(())
}

/// Displays row counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let books_count = book_service(pool).count_books().await?;
    let urls_count = url_service(pool).count_urls().await?;

    println!(
        "  Books: {}",
        books_count.to_string().bright_green().bold()
    );
    println!("  URLs:  {}", urls_count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "Schema up to date".green().bold());
        }
    }

    Ok(())
}
