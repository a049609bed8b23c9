//! Declared schema for the [`download_ips`](crate::servers::apis::v1::context::download_ips)
//! API context.
//!
//! The schema is versioned JSON Schema draft 4, the same dialect the wider
//! platform uses for its admin API resources.
use serde_json::{json, Map, Value};

use crate::servers::apis::v1::extensions::Extensions;

/// The JSON Schema dialect the item schema is declared in.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-04/schema#";

/// The schema title identifying the resource type.
pub const SCHEMA_TITLE: &str = "download_ip";

/// It builds the item schema for one download IP record, including the
/// properties contributed by the registered [`Extensions`].
#[must_use]
pub fn item_schema(extensions: &Extensions) -> Value {
    let mut properties = Map::new();

    properties.insert(
        "ip_address".to_string(),
        json!({
            "description": "IP address for the downloads.",
            "type": "string",
            "context": ["view"],
            "readonly": true
        }),
    );

    extensions.apply_to_schema(&mut properties);

    json!({
        "$schema": SCHEMA_DIALECT,
        "title": SCHEMA_TITLE,
        "type": "object",
        "properties": properties
    })
}

/// It builds the declared query parameters for the collection.
///
/// `match` is declared optional here while validation rejects requests
/// without it. Consumers driving the endpoint from the declared parameters
/// alone would otherwise refuse to send the parameter at all.
#[must_use]
pub fn collection_params() -> Value {
    json!({
        "context": {
            "description": "Scope under which the request is made; determines fields present in response.",
            "type": "string",
            "enum": ["view"],
            "default": "view"
        },
        "match": {
            "description": "A matching IP address.",
            "type": "string",
            "required": false
        }
    })
}

/// It builds the discovery document returned by the `OPTIONS` endpoint.
#[must_use]
pub fn discovery_document(extensions: &Extensions) -> Value {
    json!({
        "methods": ["GET"],
        "args": collection_params(),
        "schema": item_schema(extensions)
    })
}
