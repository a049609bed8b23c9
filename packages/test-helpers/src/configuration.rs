//! Ephemeral configurations for testing.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use downlog_api_configuration::Configuration;

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one API server at the same
/// time.
///
/// > **NOTICE**: port 0 is used to get a random free port.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    // Disable logging unless you need to debug tests
    config.logging.threshold = downlog_api_configuration::Threshold::Off;

    // Ephemeral socket address
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

    // Sample token for the authenticated endpoints
    config.http_api.add_token("admin", "MyAccessToken");

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("downlog_{random_db_id}.db"));
    config.core.database.path = temp_file.to_str().unwrap().to_owned();

    config
}
