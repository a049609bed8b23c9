//! Configuration data structures for the [Downlog admin API](https://docs.rs/downlog-api).
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `downlog-api.toml` in the project root folder or from an environment
//! variable with the same content as the file.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::collections::HashMap;
use std::env;

use thiserror::Error;

// Environment variables

/// The whole `downlog-api.toml` file content. It has priority over the config
/// file. Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "DOWNLOG_API_CONFIG_TOML";

/// The `downlog-api.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "DOWNLOG_API_CONFIG_TOML_PATH";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type Database = v1::database::Database;
pub type Driver = v1::database::Driver;
pub type HttpApi = v1::http_api::HttpApi;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

pub type AccessTokens = HashMap<String, String>;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build configuration info.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        #[from]
        source: figment::Error,
    },

    #[error("The configuration file is not a valid TOML document: {source}")]
    ConfigParseError {
        #[from]
        source: toml::de::Error,
    },
}
