use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sqlx::postgres::PgPoolOptions;
use tokio::fs;

pub type DbPool = sqlx::PgPool;
pub type OrmConn = DatabaseConnection;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create a SeaORM connection for the service layer.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Apply every `.sql` file under `migrations/` in filename order, returning
/// how many files were applied.
pub async fn run_migrations(conn: &OrmConn) -> Result<usize> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir("migrations").await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in &files {
        let sql = fs::read_to_string(file).await?;
        // Postgres rejects multiple commands in one prepared statement, so
        // run the file one statement at a time.
        for command in sql.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            conn.execute(Statement::from_string(backend, format!("{command};")))
                .await?;
        }
        tracing::debug!(file = %file.display(), "migration applied");
    }

    Ok(files.len())
}
