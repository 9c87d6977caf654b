use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Login name already taken: {login_name} {location}")]
    AlreadyExists {
        login_name: String,
        location: ErrorLocation,
    },

    #[error("Record not found: {key} {location}")]
    NotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Credential rejected for {login_name} {location}")]
    Unauthorized {
        login_name: String,
        location: ErrorLocation,
    },

    #[error("Snapshot rejected: {message} {location}")]
    DuplicateRecord {
        message: String,
        location: ErrorLocation,
    },

    #[error("Snapshot rejected: last access time of {login_name} ({at}) is out of range {location}")]
    TimestampOutOfRange {
        login_name: String,
        at: String,
        location: ErrorLocation,
    },

    #[error("Snapshot IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Snapshot encoding error: {source} {location}")]
    Serde {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Unsupported snapshot format version {found} (supported: {supported}) {location}")]
    UnsupportedVersion {
        found: u32,
        supported: u32,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Snapshot load/save failures. These are logged and never reach a
    /// directory caller.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRecord { .. }
                | Self::TimestampOutOfRange { .. }
                | Self::Io { .. }
                | Self::Serde { .. }
                | Self::UnsupportedVersion { .. }
        )
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serde {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
