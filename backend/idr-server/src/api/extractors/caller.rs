//! Who is on the other end of a request

use crate::ApiError;

use idr_service::{CallerContext, UNKNOWN_ORIGIN};

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

/// Header carrying the caller's local account name
pub const CALLER_USER_HEADER: &str = "X-Caller-User";

/// Builds a [`CallerContext`] from the TCP peer address and the
/// `X-Caller-User` header. Never rejects a request.
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let origin = parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| String::from(UNKNOWN_ORIGIN));

            let local_user = match parts.headers.get(CALLER_USER_HEADER) {
                Some(value) => match value.to_str() {
                    Ok(user) => Some(user.to_string()),
                    Err(_) => {
                        log::warn!(
                            "Ignoring non-ASCII {} header from {}",
                            CALLER_USER_HEADER,
                            origin
                        );
                        None
                    }
                },
                None => None,
            };

            Ok(Caller(CallerContext::new(origin, local_user)))
        }
    }
}
