//! `PostgreSQL` persistence for buttons.
//!
//! # Database
//!
//! One table, `buttons.button`, with a unique index on `name`. Migrations
//! live in `crates/api/migrations/` and are applied by the CLI:
//! ```bash
//! cargo run -p buttons-cli -- migrate
//! ```
//! The API server never migrates on startup.

pub mod buttons;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use buttons::PgButtonRepository;

/// Create a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
