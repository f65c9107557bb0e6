//! CLI administration tool for i8-shortener.
//!
//! Provisions users without going through SSO, shows stored users and
//! statistics, and performs database checks without requiring HTTP access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user and print their API key
//! cargo run --bin admin -- user create alice@example.com
//!
//! # Create a user with a known external id, without prompting
//! cargo run --bin admin -- user create alice@example.com --external-id 42 --yes
//!
//! # Show a user
//! cargo run --bin admin -- user show 42
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
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//!
//! # Features
//!
//! - **User Provisioning**: Same get-or-create path as SSO sign-in
//! - **Statistics**: User and link counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation before writing
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use i8_shortener::config::Config;
use i8_shortener::domain::repositories::UserRepository;
use i8_shortener::infrastructure::persistence::PgUserRepository;
use i8_shortener::server::build_store;
use i8_shortener::utils::api_key::generate_api_key;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use validator::ValidateEmail;

/// CLI tool for managing i8-shortener.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user (or fetch the existing one) and print the API key
    Create {
        /// Email address (trimmed and lowercased)
        email: String,

        /// Identity-provider id (random if not provided)
        #[arg(short, long)]
        external_id: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a user by external id
    Show {
        /// Identity-provider id
        external_id: String,
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

    let database_url = Config::load_database_url().context("Failed to load database configuration")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::Create {
            email,
            external_id,
            yes,
        } => create_user(pool, email, external_id, yes).await?,
        UserAction::Show { external_id } => show_user(pool, external_id).await?,
    }

    Ok(())
}

/// Normalizes an email address the way provisioning stores it.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Creates a user through the get-or-create path.
///
/// # Flow
///
/// 1. Normalize and validate the email
/// 2. Use the given external id or generate one
/// 3. Confirm (unless `--yes` flag)
/// 4. Get or create the user; an existing user keeps id and API key, and
///    their email is updated if it changed
/// 5. Print the API key
async fn create_user(
    pool: &PgPool,
    email: String,
    external_id: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = normalize_email(&email);
    if !email.validate_email() {
        anyhow::bail!("'{}' is not a valid email address", email);
    }

    let external_id = match external_id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            let generated = generate_api_key().map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", "✨ Generated external id".green());
            generated
        }
    };

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Email:       {}", email.cyan());
    println!("  External id: {}", external_id.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let store = build_store(Arc::new(pool.clone()));
    let user = store
        .get_or_create_user(&external_id, &email, true)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?
        .context("Creating the user failed, retry the command")?;

    println!();
    println!("{}", "✅ User ready!".green().bold());
    println!();
    println!("  ID:      {}", user.id.to_string().bright_black());
    println!("  API key: {}", user.api_key.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -d \"apikey={}\" -d \"url=https://example.com\" http://localhost:3000/shorten",
        user.api_key.bright_yellow()
    );
    println!();

    Ok(())
}

/// Prints a stored user by external id.
async fn show_user(pool: &PgPool, external_id: String) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    let user = repo
        .find_by_external_id(&external_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("{}", "👤 User".bright_blue().bold());
    println!();
    println!("  ID:          {}", user.id.to_string().bright_black());
    println!("  External id: {}", user.external_id.cyan());
    println!("  Email:       {}", user.email.cyan());
    println!("  API key:     {}", user.api_key.bright_yellow());
    println!(
        "  Created:     {}",
        user.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of users
/// - Total number of short links
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users: {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
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
