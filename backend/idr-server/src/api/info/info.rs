use crate::{ApiResult, AppState};

use idr_service::InfoResponse;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/info/{kind}
///
/// `kind` is `users`, `ids`, `uuids` or `all`, in any case.
pub async fn get_info(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<Json<InfoResponse>> {
    let info = state.service.get_info(&kind).await?;
    Ok(Json(info))
}
