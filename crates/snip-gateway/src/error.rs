use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::StoreError;
use thiserror::Error;
use tracing::{debug, error};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no url provided")]
    MissingUrl,
    #[error("invalid short code, couldn't find equivalent long url")]
    UnknownShortCode(String),
    #[error("stored url for {0} cannot be used as a redirect target")]
    InvalidRedirectTarget(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::Store(StoreError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnknownShortCode(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRedirectTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(StoreError::IdentifierSpaceExhausted { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            debug!(error = ?self, "request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
