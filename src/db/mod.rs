pub use pool::DbPool;

mod pool;

pub type Database = DbPool;

pub async fn init_db(database_url: &str) -> Result<Database, sqlx::Error> {
    let db = Database::new(database_url).await?;

    pool::run_migrations(&db).await?;

    Ok(db)
}
