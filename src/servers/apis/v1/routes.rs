//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::download_ips;
use super::extensions::Extensions;
use crate::core::DownloadLog;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, download_log: Arc<DownloadLog>, extensions: Arc<Extensions>) -> Router {
    let v1_prefix = format!("{prefix}/v1");

    download_ips::routes::add(&v1_prefix, router, download_log, extensions)
}
