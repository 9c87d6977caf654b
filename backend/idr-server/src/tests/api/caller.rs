use crate::{CALLER_USER_HEADER, Caller};

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::Request,
};

#[tokio::test]
async fn given_peer_address_and_header_when_extracted_then_both_used() {
    // Given
    let mut request = Request::builder()
        .header(CALLER_USER_HEADER, "jdoe")
        .body(Body::empty())
        .unwrap();
    let addr: SocketAddr = "192.168.1.20:54321".parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    let (mut parts, _body) = request.into_parts();

    // When
    let Caller(caller) = Caller::from_request_parts(&mut parts, &()).await.unwrap();

    // Then
    assert_eq!(caller.client_origin, "192.168.1.20");
    assert_eq!(caller.local_user.as_deref(), Some("jdoe"));
}

#[tokio::test]
async fn given_no_connect_info_when_extracted_then_unknown_origin() {
    // Given
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _body) = request.into_parts();

    // When
    let Caller(caller) = Caller::from_request_parts(&mut parts, &()).await.unwrap();

    // Then
    assert_eq!(caller.client_origin, "unknown");
    assert!(caller.local_user.is_none());
}
