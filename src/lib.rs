//! Downlog admin API. An administrative REST API for the download log of an
//! e-commerce storefront.
//!
//! The storefront records every file download a customer makes in a
//! persistent download log. This crate exposes a small, read-only lookup
//! API over that log so store operators can find which client IP addresses
//! initiated downloads, for example during a fraud or abuse investigation.
//!
//! The crate is organized in three layers:
//!
//! - [`bootstrap`]: application setup. Configuration loading, logging and
//!   the job launchers that start the servers.
//! - [`core`]: the domain layer. The [`DownloadLog`](crate::core::DownloadLog)
//!   service and its persistence module.
//! - [`servers`]: the delivery layer. The HTTP API server.
//!
//! # Endpoints
//!
//! Refer to the [`apis`](crate::servers::apis) module for the list of
//! available API endpoints.
//!
//! # Configuration
//!
//! Refer to the `downlog-api-configuration` crate docs for the configuration
//! options.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
