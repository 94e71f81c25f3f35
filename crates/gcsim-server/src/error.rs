use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gcsim_fields::FieldsError;
use gcsim_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid fields parameter: {0}")]
    Fields(#[from] FieldsError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Fields(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::InvalidBucketName { .. }) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::BucketNotFound(_) | StoreError::ObjectNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(StoreError::BucketExists(_)) => StatusCode::CONFLICT,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Renders `{"error": {"code": .., "message": ..}}`.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }
        let body = json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        });
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
