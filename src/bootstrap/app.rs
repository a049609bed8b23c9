//! Setup for the main application process.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does
//! is start a bunch of independent jobs. If you are looking for how jobs are
//! started, refer to [`app`](crate::app).
use std::sync::Arc;

use downlog_api_configuration::{Configuration, Info};

use crate::bootstrap;
use crate::core::services::download_log_factory;
use crate::core::DownloadLog;

/// It loads the application configuration and builds the domain layer.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./downlog-api.toml` file or the env var `DOWNLOG_API_CONFIG_TOML`.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<DownloadLog>) {
    let configuration = Arc::new(initialize_configuration());
    let download_log = initialize_with_configuration(&configuration);

    (configuration, download_log)
}

/// It initializes the application with the given configuration.
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<DownloadLog> {
    initialize_logging(configuration);
    Arc::new(initialize_download_log(configuration))
}

/// It loads the application configuration.
///
/// # Panics
///
/// Will panic if the configuration is not valid.
#[must_use]
fn initialize_configuration() -> Configuration {
    const DEFAULT_CONFIG_TOML_PATH: &str = "./downlog-api.toml";

    let info = Info::new(DEFAULT_CONFIG_TOML_PATH.to_string()).expect("it should be able to build the configuration info");

    Configuration::load(&info).expect("it should be able to load the configuration")
}

/// It builds the domain layer service.
#[must_use]
pub fn initialize_download_log(config: &Arc<Configuration>) -> DownloadLog {
    download_log_factory(config)
}

/// It initializes the application logging.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
