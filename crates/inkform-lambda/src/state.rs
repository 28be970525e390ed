use aws_sdk_s3::Client as S3Client;
use aws_sdk_sesv2::Client as SesClient;

use inkform_records::pool::DatabasePool;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub ses: SesClient,
    pub pool: DatabasePool,
    pub bucket: String,
    pub sender: String,
}
