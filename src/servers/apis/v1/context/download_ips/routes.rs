//! API routes for the [`download_ips`](crate::servers::apis::v1::context::download_ips)
//! API context.
//!
//! - `GET /data/download-ips?match=<prefix>`
//! - `OPTIONS /data/download-ips`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::download_ips).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{discovery_handler, search_download_ips_handler, DownloadIpsState};
use crate::core::DownloadLog;
use crate::servers::apis::v1::extensions::Extensions;

/// It adds the routes to the router for the
/// [`download_ips`](crate::servers::apis::v1::context::download_ips) API context.
pub fn add(prefix: &str, router: Router, download_log: Arc<DownloadLog>, extensions: Arc<Extensions>) -> Router {
    let state = DownloadIpsState {
        download_log,
        extensions,
    };

    router.route(
        &format!("{prefix}/data/download-ips"),
        get(search_download_ips_handler).options(discovery_handler).with_state(state),
    )
}
