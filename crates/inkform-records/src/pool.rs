use sqlx::{Pool, Postgres};

use crate::error::RecordsError;

pub type DatabasePool = Pool<Postgres>;

/// Connect to Postgres and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<DatabasePool, RecordsError> {
    let pool = sqlx::PgPool::connect(database_url)
        .await
        .map_err(|e| RecordsError::Connect(e.to_string()))?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DatabasePool) -> Result<(), RecordsError> {
    tracing::info!("running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn embedded_migrations_create_the_waivers_table() {
        let migrator = sqlx::migrate!("./migrations");

        let first = migrator.iter().next().expect("no embedded migrations");
        assert_eq!(first.version, 1);
        assert!(first.sql.contains("CREATE TABLE waivers"));
        assert!(first.sql.contains("CREATE INDEX waivers_waiver_id_idx"));
    }
}
