//! Logic to run the admin API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! For the time being the `ApiServer` is only used in tests where we need to
//! start and stop the server multiple times. The main application uses the
//! [`admin_apis job`](crate::bootstrap::jobs::admin_apis) which internally
//! also relies on these structs.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::Handle;
use derive_more::Constructor;
use downlog_api_configuration::AccessTokens;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::info;

use super::routes::router;
use super::v1::extensions::Extensions;
use crate::bootstrap::jobs::Started;
use crate::core::DownloadLog;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error: {0}")]
    Error(String),
}

/// An alias for the [`ApiServer`] in `stopped` state.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// An alias for the [`ApiServer`] in `running` state.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// A controller for the API server.
///
/// It's a state machine. Configurations cannot be changed. This struct
/// represents concrete configuration and state. It allows to start and stop
/// the server but always keeping the same configuration.
pub struct ApiServer<S> {
    pub state: S,
}

/// The `stopped` state of the [`ApiServer`].
pub struct Stopped {
    launcher: Launcher,
}

/// The `running` state of the [`ApiServer`].
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the API server with the given configuration.
    ///
    /// # Errors
    ///
    /// It would return an error if the "launcher" spawned task is not able to
    /// send the started message.
    ///
    /// # Panics
    ///
    /// It would panic spawned task panics.
    pub async fn start(
        self,
        download_log: Arc<DownloadLog>,
        extensions: Arc<Extensions>,
        access_tokens: Arc<AccessTokens>,
    ) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(download_log, extensions, access_tokens, tx_start, rx_halt);

            server.await;

            launcher
        });

        let api_server = match rx_start.await {
            Ok(started) => ApiServer {
                state: Running {
                    binding: started.address,
                    halt_task: tx_halt,
                    task,
                },
            },
            Err(err) => {
                let msg = format!("Unable to start API server: {err}");
                return Err(Error::Error(msg));
            }
        };

        Ok(api_server)
    }
}

impl ApiServer<Running> {
    /// Stops the API server.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was
    /// closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::Error("Task killer channel was closed.".to_string()))?;

        let launcher = self.state.task.await.map_err(|e| Error::Error(e.to_string()))?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A launcher for the API server.
#[derive(Constructor, Debug)]
pub struct Launcher {
    /// The address where the server will bind.
    pub bind_to: SocketAddr,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// # Panics
    ///
    /// Will panic if unable to bind to the socket address, or if it fails to
    /// send the started message to the main application process.
    pub fn start(
        &self,
        download_log: Arc<DownloadLog>,
        extensions: Arc<Extensions>,
        access_tokens: Arc<AccessTokens>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let app = router(download_log, extensions, access_tokens);

        let running = Box::pin(async move {
            info!(target: "API", "Starting on {address}");

            axum_server::from_tcp(socket)
                .handle(handle)
                .serve(app.into_make_service_with_connect_info::<std::net::SocketAddr>())
                .await
                .expect("Axum server crashed.");
        });

        tx_start
            .send(Started { address })
            .expect("the API server should not be dropped");

        running
    }
}
