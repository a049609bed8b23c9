//! Download log domain services.
//!
//! There is one service:
//!
//! - [Download IPs service](crate::core::services::download_ips): it searches
//!   the download log for distinct client IP addresses.
pub mod download_ips;

use downlog_api_configuration::Configuration;

use crate::core::DownloadLog;

/// It returns a new download log building its dependencies.
///
/// # Panics
///
/// Will panic if the download log cannot be instantiated.
#[must_use]
pub fn download_log_factory(config: &Configuration) -> DownloadLog {
    match DownloadLog::new(config) {
        Ok(download_log) => download_log,
        Err(error) => {
            panic!("{error}")
        }
    }
}
