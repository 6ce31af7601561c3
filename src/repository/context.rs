//! Database context for managing connections and repository access.
//!
//! The DbContext is the primary entry point for all database operations.
//! It holds the connection factory and hands out repositories.

use std::path::Path;

use diesel_async::{RunQueryDsl, SimpleAsyncConnection};

use super::hike::HikeRepository;
use super::pool::{DieselError, SqlitePool};

/// Database context that manages the connection factory and provides repository access.
///
/// # Example
/// ```ignore
/// let ctx = DbContext::from_sqlite_path(&db_path);
/// ctx.init_schema().await?;
/// let stats = ctx.hikes().stats().await?;
/// ```
#[derive(Clone, Debug)]
pub struct DbContext {
    pool: SqlitePool,
}

impl DbContext {
    /// Create a context from a database file path.
    pub fn from_sqlite_path(db_path: &Path) -> Self {
        Self {
            pool: SqlitePool::from_path(db_path),
        }
    }

    /// Create a context from a database URL (`sqlite:` prefix optional).
    pub fn from_url(url: &str) -> Self {
        Self {
            pool: SqlitePool::new(url),
        }
    }

    /// Get the underlying connection factory.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a hike repository.
    pub fn hikes(&self) -> HikeRepository {
        HikeRepository::new(self.pool.clone())
    }

    /// Create tables, indexes and the `hikes_with_peaks` view if missing.
    pub async fn init_schema(&self) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;
        conn.batch_execute(include_str!("schema_sqlite.sql")).await
    }

    /// Names of all user tables and views, sorted.
    pub async fn list_tables(&self) -> Result<Vec<String>, DieselError> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<TableName> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .load(&mut conn)
        .await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }
}

#[derive(diesel::QueryableByName)]
struct TableName {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
}
