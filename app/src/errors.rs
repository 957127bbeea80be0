// app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  // Any failed store call. The original service swallowed several of these.
  #[error("Storage Failure: {0}")]
  Storage(#[from] StoreError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::BadRequest(m) | AppError::Unauthorized(m) | AppError::NotFound(m) => json!({ "error": m }),
      AppError::Config(m) => json!({ "error": "configuration issue", "detail": m }),
      // Driver messages can leak schema details; keep them in the log only.
      AppError::Storage(_) => json!({ "error": "storage operation failed" }),
      AppError::Internal(m) => json!({ "error": "an internal error occurred", "detail": m }),
    };
    HttpResponse::build(status).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
