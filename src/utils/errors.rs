//! Application error types and their HTTP mapping.
//!
//! Every fallible operation in the crate returns [`AppError`]. Each variant
//! is one error kind; the boundary mapping to an HTTP status lives in a
//! single place ([`AppError::status_code`]) so services never deal with
//! transport concerns.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{resource} not found with {field}: {value}")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    TokenInvalid,

    #[error("Token is malformed")]
    TokenMalformed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found<V: ToString>(resource: &'static str, field: &'static str, value: V) -> Self {
        Self::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized<M: Into<String>>(message: M) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<M: Into<String>>(message: M) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized(_)
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::TokenMalformed => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs, not the response body.
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
