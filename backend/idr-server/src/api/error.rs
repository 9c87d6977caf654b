//! REST API error types
//!
//! Every failure leaves the server as
//! `{"error": {"code", "message", "field"?}}` with a matching status.

use idr_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 409
    #[error("Already exists: {message} {location}")]
    AlreadyExists {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::AlreadyExists { message, .. } => {
                (StatusCode::CONFLICT, "ALREADY_EXISTS", message, None)
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::AlreadyExists { location, .. } => {
                ApiError::AlreadyExists { message, location }
            }
            ServiceError::NotFound { location, .. } => ApiError::NotFound { message, location },
            ServiceError::Unauthorized { location, .. } => {
                ApiError::Unauthorized { message, location }
            }
            ServiceError::Validation {
                message,
                field,
                location,
            } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::Internal { location, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Malformed or missing JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid request body: {}", rejection.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Path segments that do not decode, e.g. percent-encoded invalid UTF-8
impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid path: {}", rejection.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
