//! Admin API job starter.
//!
//! The [`admin_apis::start_job`](crate::bootstrap::jobs::admin_apis::start_job)
//! function starts the admin REST API.
//!
//! > **NOTICE**: that even though there is only one job the API has different
//! versions. API consumers can choose which version to use. The API version
//! is part of the URL, for example:
//! `http://localhost:1212/api/v1/data/download-ips`.
//!
//! The [`admin_apis::start_job`](crate::bootstrap::jobs::admin_apis::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back to
//! the main application. The main application waits until it receives the
//! message [`Started`] from the "**launcher**".
//!
//! The "**launcher**" is an intermediary thread that decouples the API server
//! from the process that handles it.
//!
//! Refer to the `downlog-api-configuration` crate docs for the API
//! configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use downlog_api_configuration::{AccessTokens, HttpApi};
use tokio::task::JoinHandle;

use super::Started;
use crate::core;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::v1::extensions::Extensions;
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The function starts a new concurrent task that will run the API server.
/// This task will send a message to the main application process to notify
/// that the API server was successfully started.
///
/// # Panics
///
/// It would panic if unable to send the [`Started`] notice.
pub async fn start_job(
    config: &HttpApi,
    download_log: Arc<core::DownloadLog>,
    extensions: Arc<Extensions>,
    version: Version,
) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    let access_tokens = Arc::new(config.access_tokens.clone());

    match version {
        Version::V1 => start_v1(bind_to, download_log, extensions, access_tokens).await,
    }
}

async fn start_v1(
    socket: SocketAddr,
    download_log: Arc<core::DownloadLog>,
    extensions: Arc<Extensions>,
    access_tokens: Arc<AccessTokens>,
) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket))
        .start(download_log, extensions, access_tokens)
        .await
        .expect("it should be able to start the admin api");

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
