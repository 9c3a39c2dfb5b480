//! CLI administration tool for link-tracker.
//!
//! Provides commands for inspecting and deleting links, viewing statistics,
//! and checking the database without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List links, newest first
//! cargo run --bin admin -- links list --page 2 --limit 20
//!
//! # Show one link and its recent visitors
//! cargo run --bin admin -- links info promo
//! cargo run --bin admin -- links analytics promo
//!
//! # Delete a link (asks for confirmation unless -y is given)
//! cargo run --bin admin -- links delete promo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `DB_MAX_CONNECTIONS` and the other pool settings from [`link_tracker::config`]

use link_tracker::application::services::LinkService;
use link_tracker::config::Config;
use link_tracker::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};
use link_tracker::server::connect_database;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type PgLinkService = LinkService<PgLinkRepository, PgVisitRepository>;

/// CLI tool for managing link-tracker.
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
    /// Inspect and delete short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Show link metadata
    Info { code: String },

    /// Show click count and the five most recent visitors
    Analytics { code: String },

    /// Delete a link and all of its visits
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn link_service(pool: &PgPool) -> PgLinkService {
    let pool = Arc::new(pool.clone());
    LinkService::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool)),
    )
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = link_service(pool);

    match action {
        LinkAction::List { page, limit } => list_links(&service, page, limit).await?,
        LinkAction::Info { code } => show_info(&service, &code).await?,
        LinkAction::Analytics { code } => show_analytics(&service, &code).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Prints one page of links.
///
/// # Output Format
///
/// ```text
/// 📋 Links (page 1, 10 per page, 15 total)
///
///   ID    Code                  Clicks   Created            Target
///   ───────────────────────────────────────────────────────────────────
///   15    promo                 3        2025-01-15 10:30   https://example.com
/// ```
async fn list_links(service: &PgLinkService, page: i64, limit: i64) -> Result<()> {
    let page = service.list_all(page, limit).await?;

    println!(
        "{}",
        format!(
            "📋 Links (page {}, {} per page, {} total)",
            page.page, page.limit, page.total
        )
        .bright_blue()
        .bold()
    );
    println!();

    if page.items.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<21} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.items {
        let code = if link.is_expired() {
            link.short_code.red()
        } else {
            link.short_code.cyan()
        };

        println!(
            "  {:<5} {:<21} {:<8} {:<18} {}",
            link.id.to_string().bright_black(),
            code,
            link.click_count,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();

    Ok(())
}

async fn show_info(service: &PgLinkService, code: &str) -> Result<()> {
    let link = service.info(code).await?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:     {}", link.short_code.cyan());
    println!("  Target:   {}", link.original_url);
    println!("  Alias:    {}", if link.is_alias { "yes" } else { "no" });
    println!("  Clicks:   {}", link.click_count.to_string().bright_green().bold());
    println!("  Created:  {}", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"));

    match link.expires_at {
        Some(expires_at) if link.is_expired() => println!(
            "  Expires:  {} {}",
            expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
            "(EXPIRED)".red()
        ),
        Some(expires_at) => println!("  Expires:  {}", expires_at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Expires:  {}", "never".bright_black()),
    }

    println!();

    Ok(())
}

async fn show_analytics(service: &PgLinkService, code: &str) -> Result<()> {
    let analytics = service.analytics(code).await?;
    let logged = service.visit_log_len(code).await?;

    println!("{}", format!("📊 Analytics for {}", code).bright_blue().bold());
    println!();
    println!(
        "  Clicks:        {}",
        analytics.click_count.to_string().bright_green().bold()
    );
    println!("  Logged visits: {}", logged);
    println!();

    if analytics.recent_visitors.is_empty() {
        println!("{}", "  No visits yet".yellow());
        println!();
        return Ok(());
    }

    println!("{}", "  Recent visitors:".bright_white());
    for visit in &analytics.recent_visitors {
        println!(
            "    {}  {}",
            visit
                .visited_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            visit.ip_address
        );
    }
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service.info(code).await?;

    println!("  Code:   {}", link.short_code.cyan());
    println!("  Target: {}", link.original_url);
    println!("  Clicks: {}", link.click_count);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link and all of its visits?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_link(code).await?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links, and how many have expired
/// - Total number of recorded visits
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = link_service(pool).total_links().await?;

    let expired_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE expires_at < NOW()")
            .fetch_one(pool)
            .await?;

    let visits_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Expired: {}",
        expired_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Visits:  {}",
        visits_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
