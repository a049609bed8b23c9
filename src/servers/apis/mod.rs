//! The admin REST API with all its versions.
//!
//! > **NOTICE**: This API should not be exposed directly to the internet, it
//! is intended for internal use only.
//!
//! Endpoints for the latest API: [v1].
//!
//! All endpoints except the health check require an authorization token which
//! must be set in the configuration before running the service. The default
//! configuration uses `?token=MyAccessToken`. Refer to
//! [Authentication](#authentication) for more information.
//!
//! # Configuration
//!
//! The configuration file has a `[http_api]` section that can be used to
//! configure the API.
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:1212"
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! Refer to the `downlog-api-configuration` crate docs for more information
//! about the API configuration.
//!
//! You can test the API using `curl`:
//!
//! ```bash
//! $ curl -s "http://0.0.0.0:1212/api/v1/data/download-ips?match=203.0.113&token=MyAccessToken"
//! ```
//!
//! The response is a JSON array. For example, the
//! [download IPs endpoint](crate::servers::apis::v1::context::download_ips#search-download-ips):
//!
//! ```json
//! [
//!   { "ip_address": "203.0.113.5" },
//!   { "ip_address": "203.0.113.17" }
//! ]
//! ```
//!
//! # Authentication
//!
//! The API supports authentication using a GET parameter token.
//!
//! <http://0.0.0.0:1212/api/v1/data/download-ips?match=203&token=MyAccessToken>
//!
//! You can set as many tokens as you want in the configuration file:
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! The token label is used to identify the token. All tokens have full access
//! to the API.
//!
//! Refer to the [`auth`](crate::servers::apis::v1::middlewares::auth)
//! middleware for more information about the authentication process.
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The API server
//! runs all the API versions on the same server using the same port.
//! Currently there is only one API version: [v1].
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The version of the HTTP Api.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP Api.
    V1,
}
