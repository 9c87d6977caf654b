//! Login REST API handlers

use crate::{
    ApiError, ApiResult, AppState, Caller, CreateLoginRequest, DeleteLoginRequest, DeleteResponse,
    LoginResponse, RenameLoginRequest, RenameResponse,
};

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use error_location::ErrorLocation;

/// POST /api/v1/logins
pub async fn create_login(
    State(state): State<AppState>,
    Caller(caller): Caller,
    payload: Result<Json<CreateLoginRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let Json(req) = payload?;

    let login = state
        .service
        .create(
            &caller,
            &req.login_name,
            req.real_name.as_deref(),
            req.password.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(LoginResponse { login })))
}

/// GET /api/v1/logins/{login_name}
pub async fn get_login(
    State(state): State<AppState>,
    login_name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Path(login_name) = login_name?;
    let login = state.service.lookup_by_name(&login_name).await?;
    Ok(Json(LoginResponse { login }))
}

/// GET /api/v1/ids/{id}
pub async fn get_login_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Path(id) = id?;
    let login = state.service.lookup_by_id(&id).await?;
    Ok(Json(LoginResponse { login }))
}

/// PUT /api/v1/logins/{login_name}
pub async fn rename_login(
    State(state): State<AppState>,
    login_name: Result<Path<String>, PathRejection>,
    payload: Result<Json<RenameLoginRequest>, JsonRejection>,
) -> ApiResult<Json<RenameResponse>> {
    let Path(login_name) = login_name?;
    let Json(req) = payload?;

    let login_name = state
        .service
        .rename(&login_name, &req.new_login_name, req.password.as_deref())
        .await?;

    Ok(Json(RenameResponse { login_name }))
}

/// DELETE /api/v1/logins/{login_name}
///
/// The body is optional; without one the record must be unprotected.
pub async fn delete_login(
    State(state): State<AppState>,
    login_name: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(login_name) = login_name?;
    let req = if body.is_empty() {
        DeleteLoginRequest::default()
    } else {
        serde_json::from_slice::<DeleteLoginRequest>(&body).map_err(|e| ApiError::Validation {
            message: format!("Invalid request body: {e}"),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        })?
    };

    let deleted = state
        .service
        .delete(&login_name, req.password.as_deref())
        .await?;

    Ok(Json(DeleteResponse { deleted }))
}
