use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures of the file-backed review store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Review not found")]
    NotFound { id: String },

    /// The backing file exists but is not valid JSON. Propagates as a
    /// server fault; there is no recovery path for a corrupt file.
    #[error("review data file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Reply text is required")]
    MissingReplyText,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingReplyText => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("[API] Request failed: {:?}", self);
        HttpResponse::build(self.status_code()).json(json!({
            "status": "error",
            "message": self.to_string(),
        }))
    }
}
