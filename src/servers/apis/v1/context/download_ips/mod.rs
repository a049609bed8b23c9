//! Download IPs API context.
//!
//! It exposes the distinct client IP addresses recorded in the download log.
//! Store operators use it to find which client IPs initiated downloads, for
//! example during a fraud or abuse investigation.
//!
//! # Endpoints
//!
//! - [Search download IPs](#search-download-ips)
//! - [Schema discovery](#schema-discovery)
//!
//! # Search download IPs
//!
//! `GET /api/v1/data/download-ips?match=<prefix>`
//!
//! Returns the distinct IP addresses whose textual value starts with the
//! given prefix, capped at 10 values. The prefix is matched literally, so
//! `match=192.%` matches IPs that contain a literal `%` character, it is not
//! a wildcard.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:1212/api/v1/data/download-ips?match=203.0.113&token=MyAccessToken"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!   { "ip_address": "203.0.113.5" },
//!   { "ip_address": "203.0.113.17" }
//! ]
//! ```
//!
//! The response carries the collection self-link in a `Link` header:
//!
//! ```text
//! Link: </api/v1/data/download-ips>; rel="collection"
//! ```
//!
//! A missing or empty `match` parameter is rejected before the store is
//! queried, and before any other parameter is validated:
//!
//! **Example response** `400`
//!
//! ```json
//! {
//!     "code": "data_download_ips_invalid_request",
//!     "message": "Invalid request. Please pass the match parameter.",
//!     "status": 400
//! }
//! ```
//!
//! If the download log store cannot be queried the error is reported, never
//! masked as an empty result:
//!
//! **Example response** `500`
//!
//! ```json
//! {
//!     "code": "data_download_ips_store_unavailable",
//!     "message": "The download log store is unavailable.",
//!     "status": 500
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the [`DownloadIp`](crate::servers::apis::v1::context::download_ips::resources::DownloadIp)
//! resource for more information about the response attributes.
//!
//! # Schema discovery
//!
//! `OPTIONS /api/v1/data/download-ips`
//!
//! Returns the declared item schema and query parameters for the endpoint,
//! so API consumers can discover the resource shape without querying data.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "methods": ["GET"],
//!     "args": {
//!         "context": {
//!             "description": "Scope under which the request is made; determines fields present in response.",
//!             "type": "string",
//!             "enum": ["view"],
//!             "default": "view"
//!         },
//!         "match": {
//!             "description": "A matching IP address.",
//!             "type": "string",
//!             "required": false
//!         }
//!     },
//!     "schema": {
//!         "$schema": "http://json-schema.org/draft-04/schema#",
//!         "title": "download_ip",
//!         "type": "object",
//!         "properties": {
//!             "ip_address": {
//!                 "description": "IP address for the downloads.",
//!                 "type": "string",
//!                 "context": ["view"],
//!                 "readonly": true
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! > **NOTICE**: the `match` parameter is declared optional in the discovery
//! > document while validation rejects requests without it. Consumers driving
//! > the endpoint from the declared parameters alone would otherwise refuse
//! > to send the parameter at all.
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
pub mod schema;
