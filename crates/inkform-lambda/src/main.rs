use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("INKFORM_BUCKET").unwrap_or_else(|_| "inkform".to_string());
    let sender = env::var("INKFORM_SENDER")
        .unwrap_or_else(|_| "Inkform Studio <no-reply@inkform.studio>".to_string());
    let database_url =
        env::var("DATABASE_URL").map_err(|_| eyre::eyre!("DATABASE_URL must be set"))?;

    let s3 = inkform_storage::client::build_client().await;
    let ses = inkform_notify::client::build_client().await;
    let pool = inkform_records::pool::connect(&database_url).await?;

    let state = AppState {
        s3,
        ses,
        pool,
        bucket,
        sender,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/waiver", post(routes::waiver::submit_waiver))
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
