use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("database connection failed: {0}")]
    Connect(String),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("{message}")]
    Insert {
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },
}

impl RecordsError {
    /// Map a query failure, surfacing the Postgres message, detail, and hint
    /// when the server reported them.
    pub(crate) fn from_query(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if let Some(pg) = db.try_downcast_ref::<PgDatabaseError>() {
                return RecordsError::Insert {
                    message: pg.message().to_string(),
                    details: pg.detail().map(|s| s.to_string()),
                    hint: pg.hint().map(|s| s.to_string()),
                };
            }
        }
        RecordsError::Insert {
            message: e.to_string(),
            details: None,
            hint: None,
        }
    }
}
