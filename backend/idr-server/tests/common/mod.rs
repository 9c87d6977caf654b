#![allow(dead_code)]

//! Test infrastructure for idr-server API tests

use idr_config::ValidationConfig;
use idr_server::{AppState, build_router};
use idr_service::{DirectoryService, ShutdownCoordinator};
use idr_store::{RecordStore, SnapshotManager};

use std::path::Path;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SNAPSHOT_FILE: &str = "registry.backup";

/// AppState whose snapshot file lives under `dir`
pub fn create_test_app_state(dir: &Path) -> AppState {
    let store = RecordStore::new();
    let snapshots = SnapshotManager::new(
        store.clone(),
        dir.join(SNAPSHOT_FILE),
        Duration::from_secs(120),
    );
    let service = DirectoryService::new(store, ValidationConfig::default());

    AppState::new(service, snapshots, ShutdownCoordinator::new())
}

pub fn create_test_router(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Send one request and decode the JSON body (Null for an empty body)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Create a login through the API, returning its id
pub async fn create_login(app: &Router, login_name: &str, password: Option<&str>) -> String {
    let body = match password {
        Some(pw) => serde_json::json!({ "login_name": login_name, "password": pw }),
        None => serde_json::json!({ "login_name": login_name }),
    };
    let (status, json) = send(app, "POST", "/api/v1/logins", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["login"]["id"].as_str().unwrap().to_string()
}
