//! Version `1` of the [Downlog admin API](https://docs.rs/downlog-api)
//! configuration data structures.
//!
//! # Sections
//!
//! Each section in the toml structure is mapped to a data structure. For
//! example, the `[http_api]` section is mapped to the [`HttpApi`] structure.
//!
//! - [`Logging configuration`](crate::v1::logging::Logging)
//! - [`Core configuration`](crate::v1::core::Core)
//! - [`HTTP API configuration`](crate::v1::http_api::HttpApi)
//!
//! ## Default configuration
//!
//! The default configuration is:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/downlog-api/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "127.0.0.1:1212"
//! ```
//!
//! The default configuration has no access tokens, so every authenticated
//! endpoint rejects requests until at least one token is added:
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info};

/// Prefix for the environment variables that override the configuration
/// options. For example, `DOWNLOG_API_HTTP_API__BIND_ADDRESS` overrides the
/// `http_api.bind_address` option.
const CONFIG_OVERRIDE_PREFIX: &str = "DOWNLOG_API_";

/// Path separator in the environment variable names used to override nested
/// configuration options.
const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

/// The whole configuration for the admin API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the [`Info`] struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the environment variable does not exist or has a
    /// bad configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            // Config in env var has priority over config file path
            Figment::from(Serialized::defaults(Configuration::default()))
                .merge(Toml::string(config_toml))
                .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR))
        } else {
            Figment::from(Serialized::defaults(Configuration::default()))
                .merge(Toml::file(&info.config_toml_path))
                .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR))
        };

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}
