use crate::ApiError;

use idr_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_into_response_then_404_with_json_body() {
    // Given
    let error = ApiError::NotFound {
        message: "No login named 'ghost'".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No login named 'ghost'");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_when_into_response_then_400_with_field() {
    // Given
    let error = ApiError::Validation {
        message: "login_name cannot be empty".into(),
        field: Some("login_name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "login_name");
}

#[tokio::test]
async fn given_service_already_exists_when_converted_then_409() {
    // Given
    let error = ApiError::from(ServiceError::AlreadyExists {
        message: "Login name 'alice' is already taken".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(json["error"]["message"], "Login name 'alice' is already taken");
}

#[tokio::test]
async fn given_service_unauthorized_when_converted_then_401() {
    // Given
    let error = ApiError::from(ServiceError::Unauthorized {
        message: "Password does not match for 'bob'".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn given_service_internal_when_converted_then_500() {
    // Given
    let error = ApiError::from(ServiceError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}
