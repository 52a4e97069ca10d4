//! CLI administration tool for shortlink.
//!
//! Inspects the mapping store and the short link derivation without going
//! through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Check the MongoDB connection and the shortLink index
//! cargo run --bin admin -- db check
//!
//! # Show where a short link points
//! cargo run --bin admin -- link get A2CtXk8k
//!
//! # Show what a creation path would produce (no store access)
//! cargo run --bin admin -- link derive /add/vocdoni.app/processes/<64 hex chars>
//! ```
//!
//! # Environment Variables
//!
//! - `MONGO_URI`, `MONGO_DB` (required for `db` and `link get`)
//! - `ALLOWED_DOMAINS` (optional, used by `link derive` to report the domain check)

use shortlink::domain::allowed_domains::AllowedDomains;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::persistence::MongoMappingRepository;
use shortlink::utils::code_generator::{ShortLinkKind, find_process_id, short_link_from_process_id};
use shortlink::utils::creation_path::CreationPath;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shortlink.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Short link inspection
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Connect, ping, ensure the index and count stored links
    Check,
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Print the long link stored for a short link
    Get {
        /// Short link, without the leading slash
        short_link: String,
    },

    /// Show the long link and short link strategy for a creation path
    Derive {
        /// Creation path, e.g. /add/example.com/foo/bar
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Db { action } => handle_db_action(action).await?,
        Commands::Link { action } => handle_link_action(action).await?,
    }

    Ok(())
}

async fn connect() -> Result<MongoMappingRepository> {
    let uri = std::env::var("MONGO_URI").context("MONGO_URI must be set")?;
    let db = std::env::var("MONGO_DB").context("MONGO_DB must be set")?;

    MongoMappingRepository::connect(&uri, &db)
        .await
        .context("Failed to connect to MongoDB")
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking MongoDB connection...".bright_blue());

            let repo = connect().await?;
            println!("{}", "Connection, ping and shortLink index OK".green().bold());

            let count = repo.count().await?;
            println!("  Stored links: {}", count.to_string().bright_white());
        }
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction) -> Result<()> {
    match action {
        LinkAction::Get { short_link } => {
            let repo = connect().await?;

            match repo.find_by_short_link(&short_link).await? {
                Some(mapping) => {
                    println!("{} => {}", mapping.short_link.bold(), mapping.long_link.green());
                }
                None => {
                    println!("{}", format!("No link stored for '{short_link}'").yellow());
                }
            }
        }
        LinkAction::Derive { path } => derive(&path)?,
    }

    Ok(())
}

/// Explains what a creation request for `path` would store.
fn derive(path: &str) -> Result<()> {
    let request = CreationPath::parse(path).context("Invalid creation path")?;

    println!("  Domain:    {}", request.domain.bright_white());
    if let Ok(raw) = std::env::var("ALLOWED_DOMAINS") {
        let allowed = AllowedDomains::from_csv(&raw);
        if allowed.contains(request.domain) {
            println!("  Allowed:   {}", "yes".green());
        } else {
            println!("  Allowed:   {}", "no (request would be rejected)".red());
        }
    }
    println!("  Long link: {}", request.long_link().bright_white());

    match find_process_id(request.segments.iter().copied()) {
        Some(process_id) => {
            println!("  Strategy:  {}", ShortLinkKind::ProcessId.as_str().cyan());
            println!("  Process:   {}", hex::encode(&process_id));
            println!(
                "  Short link: {}",
                short_link_from_process_id(&process_id).green().bold()
            );
        }
        None => {
            println!("  Strategy:  {}", ShortLinkKind::Uuid.as_str().cyan());
            println!("  Short link: {}", "random, differs on every request".yellow());
        }
    }

    Ok(())
}
