//! Common responses for the API v1 shared by all the contexts.
//!
//! Errors are always JSON objects with a machine-readable `code`, a human
//! readable `message` and the HTTP `status` repeated in the body:
//!
//! ```json
//! {
//!     "code": "unauthorized",
//!     "message": "Missing token for authentication.",
//!     "status": 401
//! }
//! ```
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// The JSON body shared by all the API error responses.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error code, stable across releases.
    pub code: &'static str,
    /// Human-readable error description.
    pub message: &'static str,
    /// The HTTP status code, repeated in the body.
    pub status: u16,
}

/// It builds a JSON error response with the common error body.
#[must_use]
pub fn error_response(status: StatusCode, code: &'static str, message: &'static str) -> Response {
    (
        status,
        Json(ErrorResponse {
            code,
            message,
            status: status.as_u16(),
        }),
    )
        .into_response()
}

/// `401` error response returned when the token is missing.
#[must_use]
pub fn unauthorized_response() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "unauthorized", "Missing token for authentication.")
}

/// `401` error response when the provided token is not valid.
#[must_use]
pub fn token_not_valid_response() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "token_not_valid", "Token not valid.")
}
