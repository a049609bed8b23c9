//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Download IPs` | Distinct client IPs in the download log | [`v1`](crate::servers::apis::v1::context::download_ips)
//! `Health check` | Service liveness | [`v1`](crate::servers::apis::v1::context::health_check)
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the authentication process.
pub mod context;
pub mod extensions;
pub mod middlewares;
pub mod responses;
pub mod routes;
