use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Errors surfaced by the JSON API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store could not be read. The cause is logged, never sent to clients.
    #[error("{0}")]
    StoreUnavailable(&'static str),
}

impl ApiError {
    pub fn store_unavailable(message: &'static str, err: anyhow::Error) -> Self {
        log::error!("{}: {:#}", message, err);
        ApiError::StoreUnavailable(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
