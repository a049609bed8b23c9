//! The download IPs service.
//!
//! It returns the distinct client IP addresses in the download log that start
//! with a caller-supplied prefix. Results are capped to
//! [`DOWNLOAD_IPS_LIMIT`](crate::core::DOWNLOAD_IPS_LIMIT) rows.
use std::sync::Arc;

use crate::core::databases::error::Error;
use crate::core::DownloadLog;

/// It returns the distinct download IP addresses matching the prefix.
///
/// The prefix is matched literally. `LIKE` meta characters in the prefix do
/// not act as wildcards.
///
/// # Errors
///
/// Will return a database [`Error`] if the store is unavailable.
pub fn search_download_ips(download_log: &Arc<DownloadLog>, prefix: &str) -> Result<Vec<String>, Error> {
    download_log.search_ips(prefix)
}
