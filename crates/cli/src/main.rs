//! Buttons CLI - database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! buttons-cli migrate
//!
//! # Insert one sample button per type
//! buttons-cli seed --created-by 6f1c1b84-4a6e-4b7a-9f0e-2d7c1f3f7c11
//! ```
//!
//! # Environment Variables
//!
//! - `BUTTONS_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use buttons_core::ActorId;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "buttons-cli")]
#[command(author, version, about = "Buttons service CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert sample buttons, skipping names that already exist
    Seed {
        /// UUID recorded as creator of the seeded buttons
        #[arg(long)]
        created_by: uuid::Uuid,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { created_by } => commands::seed::run(ActorId::new(created_by)).await,
    }
}
