use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Typed failure kinds for the mutation operations. The HTTP boundary
/// maps each kind to a status; the kinds stay distinct internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{entity} {id} not found")]
    ReferenceNotFound { entity: &'static str, id: i64 },

    #[error("storage failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::ConstraintViolation(msg) => (StatusCode::CONFLICT, msg.clone()),
            Error::ReferenceNotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Error::Persistence(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
