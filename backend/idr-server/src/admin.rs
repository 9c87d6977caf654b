//! Administrative endpoints for server management.

use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use log::{error, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub status: String,
    pub records: usize,
}

/// Write a snapshot now instead of waiting for the timer.
pub async fn snapshot_handler(State(state): State<AppState>) -> ApiResult<Json<SnapshotResponse>> {
    info!("Manual snapshot requested");

    match state.snapshots.snapshot_now().await {
        Ok(records) => {
            info!(
                "Manual snapshot wrote {} records to {}",
                records,
                state.snapshots.path().display()
            );
            Ok(Json(SnapshotResponse {
                status: String::from("ok"),
                records,
            }))
        }
        Err(e) => {
            error!("Manual snapshot failed: {}", e);
            Err(ApiError::Internal {
                message: String::from("Snapshot write failed"),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Begin graceful shutdown. In-flight requests finish and a final
/// snapshot is written before the process exits.
pub async fn shutdown_handler(State(state): State<AppState>) -> StatusCode {
    info!("Graceful shutdown requested via HTTP");
    state.shutdown.shutdown();
    StatusCode::ACCEPTED
}
