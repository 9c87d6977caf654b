use crate::{
    AppState, admin, create_login, delete_login, get_info, get_login, get_login_by_id, health,
    rename_login,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Directory API
        .route("/api/v1/logins", post(create_login))
        .route(
            "/api/v1/logins/{login_name}",
            get(get_login).put(rename_login).delete(delete_login),
        )
        .route("/api/v1/ids/{id}", get(get_login_by_id))
        .route("/api/v1/info/{kind}", get(get_info))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin endpoints
        .route("/admin/snapshot", post(admin::snapshot_handler))
        .route("/admin/shutdown", post(admin::shutdown_handler))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
