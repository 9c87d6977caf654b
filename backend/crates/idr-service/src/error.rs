use idr_core::CoreError;
use idr_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures a directory caller can see
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    AlreadyExists {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "ALREADY_EXISTS",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    pub fn location(&self) -> &ErrorLocation {
        match self {
            Self::AlreadyExists { location, .. }
            | Self::NotFound { location, .. }
            | Self::Unauthorized { location, .. }
            | Self::Validation { location, .. }
            | Self::Internal { location, .. } => location,
        }
    }
}

impl From<StoreError> for ServiceError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists {
                login_name,
                location,
            } => Self::AlreadyExists {
                message: format!("Login name '{login_name}' is already taken"),
                location,
            },
            StoreError::NotFound { key, location } => Self::NotFound {
                message: format!("No login named '{key}'"),
                location,
            },
            StoreError::Unauthorized {
                login_name,
                location,
            } => Self::Unauthorized {
                message: format!("Password does not match for '{login_name}'"),
                location,
            },
            // Snapshot failures never come out of request paths; report
            // them opaquely if one ever does.
            other => Self::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInfoKind { value, location } => Self::Validation {
                message: format!("unknown info kind '{value}' (expected users, ids, uuids or all)"),
                field: Some(String::from("kind")),
                location,
            },
            CoreError::Uuid { source, location } => Self::Validation {
                message: format!("malformed id: {source}"),
                field: Some(String::from("id")),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
