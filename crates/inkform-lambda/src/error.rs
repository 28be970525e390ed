use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Pipeline-stage error for the waiver handler. The stage a failure occurs
/// in decides the status code and response body shape.
#[derive(Debug)]
pub enum ApiError {
    /// A required field is missing. Rejected before any side effect.
    Validation(String),
    /// Attachment upload failed. Nothing has been persisted yet.
    Storage(String),
    /// Database insert failed. Attachments may already be uploaded; there
    /// is no compensating cleanup.
    Persistence {
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },
    /// Anything else, including malformed request bodies.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

#[derive(Serialize)]
struct DatabaseErrorBody {
    ok: bool,
    error: String,
    details: Option<String>,
    hint: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { ok: false, error }),
            )
                .into_response(),

            ApiError::Persistence {
                message,
                details,
                hint,
            } => {
                tracing::error!("waiver insert failed: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DatabaseErrorBody {
                        ok: false,
                        error: message,
                        details,
                        hint,
                    }),
                )
                    .into_response()
            }

            ApiError::Storage(message) => {
                tracing::error!("attachment upload failed: {message}");
                server_error()
            }

            ApiError::Internal(message) => {
                tracing::error!("unhandled error: {message}");
                server_error()
            }
        }
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            ok: false,
            error: "Server error".to_string(),
        }),
    )
        .into_response()
}

impl From<inkform_core::error::CoreError> for ApiError {
    fn from(e: inkform_core::error::CoreError) -> Self {
        match e {
            inkform_core::error::CoreError::MissingField(_) => ApiError::Validation(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<inkform_storage::error::StorageError> for ApiError {
    fn from(e: inkform_storage::error::StorageError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<inkform_records::error::RecordsError> for ApiError {
    fn from(e: inkform_records::error::RecordsError) -> Self {
        match e {
            inkform_records::error::RecordsError::Insert {
                message,
                details,
                hint,
            } => ApiError::Persistence {
                message,
                details,
                hint,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("request body: {e}"))
    }
}
