use std::sync::Arc;

use downlog_api::bootstrap::app::initialize_with_configuration;
use downlog_api::core::DownloadLog;
use downlog_api::servers::apis::server::{ApiServer, Launcher, RunningApiServer, StoppedApiServer};
use downlog_api::servers::apis::v1::extensions::Extensions;
use downlog_api_configuration::Configuration;

use super::connection_info::ConnectionInfo;

#[allow(clippy::module_name_repetitions, dead_code)]
pub type StoppedTestEnvironment = TestEnvironment<Stopped>;
#[allow(clippy::module_name_repetitions)]
pub type RunningTestEnvironment = TestEnvironment<Running>;

pub struct TestEnvironment<S> {
    pub cfg: Arc<Configuration>,
    pub download_log: Arc<DownloadLog>,
    pub state: S,
}

#[allow(dead_code)]
pub struct Stopped {
    api_server: StoppedApiServer,
}

pub struct Running {
    api_server: RunningApiServer,
}

impl<S> TestEnvironment<S> {
    /// Add one row to the download log, the way the embedding platform does
    /// when a customer downloads a file.
    pub fn add_download(&self, permission_id: i64, user_id: i64, user_ip_address: &str) {
        self.download_log
            .add_log_entry(permission_id, user_id, user_ip_address)
            .expect("it should add a download log entry");
    }
}

impl TestEnvironment<Stopped> {
    pub fn new_stopped(cfg: Arc<Configuration>) -> Self {
        let download_log = initialize_with_configuration(&cfg);

        let api_server = ApiServer::new(Launcher::new(cfg.http_api.bind_address));

        Self {
            cfg,
            download_log,
            state: Stopped { api_server },
        }
    }

    pub async fn start(self) -> TestEnvironment<Running> {
        let access_tokens = Arc::new(self.cfg.http_api.access_tokens.clone());

        let api_server = self
            .state
            .api_server
            .start(self.download_log.clone(), Arc::new(Extensions::default()), access_tokens)
            .await
            .unwrap();

        TestEnvironment {
            cfg: self.cfg,
            download_log: self.download_log,
            state: Running { api_server },
        }
    }
}

impl TestEnvironment<Running> {
    pub async fn stop(self) -> TestEnvironment<Stopped> {
        TestEnvironment {
            cfg: self.cfg,
            download_log: self.download_log,
            state: Stopped {
                api_server: self.state.api_server.stop().await.unwrap(),
            },
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            bind_address: self.state.api_server.state.binding.to_string(),
            api_token: self.cfg.http_api.access_tokens.get("admin").cloned(),
        }
    }
}

#[allow(clippy::module_name_repetitions)]
pub async fn running_test_environment(cfg: Configuration) -> RunningTestEnvironment {
    TestEnvironment::new_stopped(Arc::new(cfg)).start().await
}
