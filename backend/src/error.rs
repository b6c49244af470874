//! Error type shared by every API handler.
//!
//! Handlers return `Result<HttpResponse, ApiError>`; actix turns the error side
//! into a JSON `ErrorResponse` through the `ResponseError` impl below, so a failing
//! request never affects any other request.

use crate::store::StoreError;
use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::{ErrorResponse, FieldError};
use log::error;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// When set, internal error responses no longer include the underlying cause.
static PRODUCTION: AtomicBool = AtomicBool::new(false);

pub fn set_production(production: bool) {
    PRODUCTION.store(production, Ordering::Relaxed);
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Ad not found: {0}")]
    NotFound(String),
    #[error("File exceeds the maximum upload size of {limit} bytes")]
    PayloadTooLarge { limit: u64 },
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest(format!("Malformed multipart payload: {}", e))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Store(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(details) => ErrorResponse {
                error: self.to_string(),
                details: details.clone(),
                ..ErrorResponse::default()
            },
            ApiError::Store(_) | ApiError::Io(_) => {
                error!("Request failed: {}", self);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    detail: (!PRODUCTION.load(Ordering::Relaxed)).then(|| self.to_string()),
                    ..ErrorResponse::default()
                }
            }
            _ => ErrorResponse::new(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
