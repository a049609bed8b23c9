//! Downlog admin API application.
//!
//! The application has a global configuration for multiple jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for starting the jobs depending on the
//! configuration. Jobs executed always:
//!
//! - Admin REST API
use std::sync::Arc;

use downlog_api_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::admin_apis;
use crate::servers::apis::v1::extensions::Extensions;
use crate::{core, servers};

/// It starts all the application jobs and returns their handles.
pub async fn start(config: &Configuration, download_log: Arc<core::DownloadLog>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    let extensions = Arc::new(Extensions::default());

    // Start the admin REST API
    jobs.push(admin_apis::start_job(&config.http_api, download_log, extensions, servers::apis::Version::V1).await);

    jobs
}
