use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use embedding_service::EmbeddingError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;
use vector_store::VectorStoreError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid configuration: {0}")]
    Config(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("Request validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    ServiceUnavailable(String),

    // --- Upstream passthrough ---
    #[error(transparent)]
    VectorStore(#[from] VectorStoreError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::VectorStore(VectorStoreError::UnsupportedDistance { .. }) => {
                StatusCode::BAD_REQUEST
            }

            // 5xx
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::VectorStore(_)
            | AppError::Embedding(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::VectorStore(VectorStoreError::UnsupportedDistance { .. }) => "BAD_REQUEST",
            AppError::VectorStore(_) => "VECTOR_STORE_ERROR",
            AppError::Embedding(_) => "EMBEDDING_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        }

        let details = match &self {
            AppError::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// A missing `Content-Type: application/json` keeps axum's 415; every other
/// body rejection (syntax, shape, unreadable bytes) is a bad request.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        match err {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            _ => AppError::BadRequest(err.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_store::Distance;

    #[test]
    fn unsupported_distance_is_a_bad_request() {
        let err: AppError = "manhattan".parse::<Distance>().unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn upstream_errors_are_server_errors() {
        let err = AppError::from(VectorStoreError::Qdrant("Not found: Collection".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "VECTOR_STORE_ERROR");

        let err = AppError::from(EmbeddingError::Decode("empty".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
