//! HTTP mapping for store failures.
//!
//! # Design
//! A failure reaches the client in one of two ways:
//! - `StoreFailure` answers on the spot with 500 and `{"message": ...}`.
//! - `ForwardedFailure` carries no body. It is a bare 500 with the error
//!   stashed in the response extensions, and `fallback_responder`, layered
//!   over the whole router, turns it into the same 500 `{"message": ...}`.
//!   A handler that forwards never writes the failure body itself, but the
//!   client always gets one.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::StoreError;

/// Body of every 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A store failure answered by the handler itself.
#[derive(Debug)]
pub struct StoreFailure(pub StoreError);

impl IntoResponse for StoreFailure {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// A store failure left for `fallback_responder` to answer.
#[derive(Debug, Clone)]
pub struct ForwardedFailure(pub StoreError);

impl IntoResponse for ForwardedFailure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Middleware that builds the final response for forwarded failures.
pub async fn fallback_responder(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<ForwardedFailure>() {
        Some(ForwardedFailure(err)) => StoreFailure(err).into_response(),
        None => response,
    }
}
