//! The core `download log` module contains the domain logic for the IP
//! lookup, which is independent of the delivery layer.
//!
//! ```text
//! Delivery layer    Domain layer
//!
//! Admin REST API |> Download log
//! ```
//!
//! # Download log
//!
//! The [`DownloadLog`] is the main struct in this module. It is a read-mostly
//! view over the download log the wider storefront platform writes to: every
//! time a customer downloads a file the platform appends one row with the
//! client IP address that initiated the download.
//!
//! This service answers one question about that log: which distinct client
//! IP addresses start with a given prefix. The lookup is capped at
//! [`DOWNLOAD_IPS_LIMIT`] values and the prefix is always matched literally,
//! even when it contains characters that have a special meaning in the
//! underlying query language.
//!
//! # Persistence
//!
//! The download log rows are persisted in a database. Refer to the
//! [`databases`] module for more information about the supported drivers.
pub mod databases;
pub mod services;

use downlog_api_configuration::Configuration;

use self::databases::{Database, LogEntry};

/// The maximum number of distinct IP addresses returned by a lookup. This cap
/// is fixed, it is not caller-configurable.
pub const DOWNLOAD_IPS_LIMIT: u32 = 10;

/// The domain layer service for the download log.
pub struct DownloadLog {
    /// The database where the download log rows are persisted.
    pub database: Box<dyn Database>,
}

impl DownloadLog {
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to connect to the
    /// configured database.
    pub fn new(config: &Configuration) -> Result<DownloadLog, databases::error::Error> {
        let database = databases::driver::build(&config.core.database.driver, &config.core.database.path)?;

        Ok(DownloadLog { database })
    }

    /// It returns the distinct client IP addresses in the download log whose
    /// textual value starts with `prefix`, capped at [`DOWNLOAD_IPS_LIMIT`].
    ///
    /// The prefix is matched literally. Rows are returned in store-native
    /// order; no explicit ordering is applied.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if the query fails. A failed
    /// query is never reported as an empty result.
    pub fn search_ips(&self, prefix: &str) -> Result<Vec<String>, databases::error::Error> {
        self.database.load_distinct_download_ips(prefix, DOWNLOAD_IPS_LIMIT)
    }

    /// It appends one row to the download log.
    ///
    /// The admin API never calls this endpoint-side; it is used by the
    /// embedding platform when a customer downloads a file, and by test
    /// fixtures.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to save the row.
    pub fn add_log_entry(&self, permission_id: i64, user_id: i64, user_ip_address: &str) -> Result<(), databases::error::Error> {
        let entry = LogEntry {
            timestamp: chrono::Utc::now().timestamp(),
            permission_id,
            user_id,
            user_ip_address: user_ip_address.to_string(),
        };

        self.database.add_download_log_entry(&entry)?;

        Ok(())
    }
}
