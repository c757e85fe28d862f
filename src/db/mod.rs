//! Database module: models, schema and storage for trivia data.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and seed rows (SQLite-first)
//! - `sqlite.rs`: the pooled storage handle and its queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, NewQuestion, Question};
pub use sqlite::TriviaStorage;

use crate::error::TriviaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Open the database at `database_url` (creating it if missing) and make sure
/// the schema exists.
pub async fn spawn(database_url: &str) -> Result<TriviaStorage, TriviaError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = TriviaStorage::new(pool);
    storage.init_schema().await?;
    info!(database_url, "trivia store ready");
    Ok(storage)
}
