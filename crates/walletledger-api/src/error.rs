//! Error types for walletledger-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use walletledger_core::error::{ErrorCode, ErrorDetails};
use walletledger_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Ledger(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Ledger(e) => match e.code() {
                ErrorCode::TransactionNotFound => StatusCode::NOT_FOUND,
                ErrorCode::NotLoaded => StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ParseError | ErrorCode::InvalidRecord | ErrorCode::DuplicateEntry => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ErrorCode::IoError | ErrorCode::FileNotFound => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// JSON body sent to the client
    pub fn body(&self) -> serde_json::Value {
        match self {
            ApiError::Ledger(e) => {
                let details: ErrorDetails = e.to_details();
                serde_json::json!({ "success": false, "error": details })
            }
            other => serde_json::json!({
                "success": false,
                "error": { "message": other.to_string() },
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
