//! Subcommand implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use thiserror::Error;

/// Errors shared by the database commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Neither database variable is set.
    #[error("Missing environment variable: BUTTONS_DATABASE_URL (or DATABASE_URL)")]
    MissingDatabaseUrl,

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A use case failed while seeding.
    #[error("Seed error: {0}")]
    Seed(#[from] buttons_core::UseCaseError),
}

/// Read the database URL, preferring `BUTTONS_DATABASE_URL` over `DATABASE_URL`.
fn database_url() -> Result<SecretString, CommandError> {
    dotenvy::dotenv().ok();

    ["BUTTONS_DATABASE_URL", "DATABASE_URL"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .map(SecretString::from)
        .ok_or(CommandError::MissingDatabaseUrl)
}
