use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct DbPool(SqlitePool);

impl DbPool {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Ok(Self(pool))
    }

    pub fn inner(&self) -> &SqlitePool {
        &self.0
    }
}

/// Create the declared schema. The mock handlers synthesize every response
/// from request parameters and never touch these tables; they exist so that a
/// real ingestion/storage backend can be dropped in behind the same API.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    info!("Running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS datasets (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            source_type TEXT NOT NULL,
            source_url TEXT,
            description TEXT,
            created_at TEXT NOT NULL
        )
    "#,
    )
    .execute(pool.inner())
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS images (
            id TEXT PRIMARY KEY,
            dataset_id TEXT REFERENCES datasets(id),
            filename TEXT NOT NULL,
            file_path TEXT,
            file_size INTEGER,
            mime_type TEXT,
            width INTEGER,
            height INTEGER,
            metadata TEXT,
            created_at TEXT NOT NULL
        )
    "#,
    )
    .execute(pool.inner())
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS uploads (
            id TEXT PRIMARY KEY,
            user_id TEXT,
            category TEXT NOT NULL,
            original_filename TEXT,
            stored_filename TEXT,
            file_path TEXT,
            file_size INTEGER,
            processing_status TEXT NOT NULL DEFAULT 'pending',
            analysis_results TEXT,
            created_at TEXT NOT NULL
        )
    "#,
    )
    .execute(pool.inner())
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS api_usage (
            id TEXT PRIMARY KEY,
            endpoint TEXT,
            user_id TEXT,
            request_count INTEGER NOT NULL DEFAULT 1,
            date TEXT,
            created_at TEXT NOT NULL
        )
    "#,
    )
    .execute(pool.inner())
    .await?;

    info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_create_declared_tables() {
        let pool = DbPool::new("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool.inner())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, vec!["api_usage", "datasets", "images", "uploads"]);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = DbPool::new("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_pool_creates_missing_database_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let url = format!("sqlite:{}/explorer.db", dir.path().display());

        let pool = DbPool::new(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert!(dir.path().join("explorer.db").exists());
    }
}
