//! API handlers for the [`download_ips`](crate::servers::apis::v1::context::download_ips)
//! API context.
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Json, Response};
use serde::Deserialize;

use super::responses::{download_ips_response, invalid_context_response, invalid_request_response, store_unavailable_response};
use super::schema;
use crate::core::services::download_ips::search_download_ips;
use crate::core::DownloadLog;
use crate::servers::apis::v1::extensions::Extensions;

/// The contexts a request can be made under. Only `view` is supported for a
/// read-only resource.
const KNOWN_CONTEXTS: [&str; 1] = ["view"];

/// The shared state for the download IPs handlers.
#[derive(Clone)]
pub struct DownloadIpsState {
    pub download_log: Arc<DownloadLog>,
    pub extensions: Arc<Extensions>,
}

/// The query params accepted by the search endpoint.
#[derive(Deserialize, Debug)]
pub struct QueryParams {
    /// The literal IP address prefix to match. Required; rejected when
    /// missing or empty.
    #[serde(rename = "match")]
    pub match_: Option<String>,
    /// Scope under which the request is made. Optional, defaults to `view`.
    pub context: Option<String>,
}

/// It handles the request to search the distinct download IP addresses
/// matching a prefix.
///
/// It returns:
///
/// - `200` response with a JSON array of
///   [`DownloadIp`](crate::servers::apis::v1::context::download_ips::resources::DownloadIp)
///   records, at most 10, and the collection `Link` header.
/// - `400` response when the `match` parameter is missing or empty, or when
///   the `context` parameter is not an allowed value. A missing `match` is
///   reported first, whatever else is wrong with the request. The store is
///   not queried in either case.
/// - `500` response when the download log store cannot be queried.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::download_ips#search-download-ips)
/// for more information about this endpoint.
pub async fn search_download_ips_handler(State(state): State<DownloadIpsState>, Query(params): Query<QueryParams>) -> Response {
    let Some(prefix) = params.match_.filter(|prefix| !prefix.is_empty()) else {
        return invalid_request_response();
    };

    if let Some(context) = &params.context {
        if !KNOWN_CONTEXTS.contains(&context.as_str()) {
            return invalid_context_response();
        }
    }

    match search_download_ips(&state.download_log, &prefix) {
        Ok(ips) => download_ips_response(ips, &state.extensions),
        Err(e) => store_unavailable_response(&e),
    }
}

/// It handles the schema discovery request for the download IPs endpoint.
///
/// It returns a `200` response with the declared item schema and query
/// parameters.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::download_ips#schema-discovery)
/// for more information about this endpoint.
pub async fn discovery_handler(State(state): State<DownloadIpsState>) -> Json<serde_json::Value> {
    Json(schema::discovery_document(&state.extensions))
}
