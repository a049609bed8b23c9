//! API responses for the [`download_ips`](crate::servers::apis::v1::context::download_ips)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::resources;
use crate::servers::apis::v1::extensions::Extensions;
use crate::servers::apis::v1::responses::error_response;

/// The canonical URL of the download IPs collection, carried as the
/// collection self-link in every success response.
pub const COLLECTION_URL: &str = "/api/v1/data/download-ips";

/// `200` response with the shaped records and the collection `Link` header.
///
/// The body is a plain JSON array, so the collection self-link travels in a
/// `Link` response header instead of a body attribute.
#[must_use]
pub fn download_ips_response(ips: Vec<String>, extensions: &Extensions) -> Response {
    let records = resources::shape(ips, extensions);

    (
        StatusCode::OK,
        [(header::LINK, format!("<{COLLECTION_URL}>; rel=\"collection\""))],
        Json(records),
    )
        .into_response()
}

/// `400` error response when the `match` parameter is missing or empty.
#[must_use]
pub fn invalid_request_response() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "data_download_ips_invalid_request",
        "Invalid request. Please pass the match parameter.",
    )
}

/// `400` error response when the `context` parameter is not an allowed value.
#[must_use]
pub fn invalid_context_response() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "data_download_ips_invalid_context",
        "Invalid context parameter. Allowed values: view.",
    )
}

/// `500` error response when the download log store cannot be queried.
///
/// The store error is logged with its details but never leaked to the API
/// consumer.
#[must_use]
pub fn store_unavailable_response<E: std::error::Error>(e: &E) -> Response {
    tracing::error!(target: "API", "Download log store unavailable: {e}");

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "data_download_ips_store_unavailable",
        "The download log store is unavailable.",
    )
}
