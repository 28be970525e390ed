use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}
