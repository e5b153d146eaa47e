use log::{error, info};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn init() -> Result<Self, sqlx::Error> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:posts.db?mode=rwc".to_string());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        init_schema(&pool).await?;

        info!("Connected successfully to {}", database_url);

        Ok(Self { pool })
    }
}

/// Create the posts table if it does not exist yet. Public so tests can
/// apply the same schema to an in-memory pool.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Convenience wrapper around Database::init()
pub async fn connect_to_database() -> Result<SqlitePool, sqlx::Error> {
    let database = Database::init().await.map_err(|e| {
        error!("Failed to initialize database: {:?}", e);
        e
    })?;
    Ok(database.pool)
}
