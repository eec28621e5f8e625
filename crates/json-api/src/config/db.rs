//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Longest a transaction waits on a row lock before failing with a conflict.
    #[arg(long, env = "DB_LOCK_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub lock_timeout_ms: u64,
}
