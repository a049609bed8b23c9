//! API resources for the [`download_ips`](crate::servers::apis::v1::context::download_ips)
//! API context.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::servers::apis::v1::extensions::Extensions;

/// One distinct client IP address from the download log.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct DownloadIp {
    /// IP address for the downloads, textual IPv4 or IPv6 as stored.
    pub ip_address: String,
}

impl From<String> for DownloadIp {
    fn from(ip_address: String) -> Self {
        Self { ip_address }
    }
}

/// It shapes the raw IP addresses into response records, applying the
/// registered [`Extensions`] to every record.
#[must_use]
pub fn shape(ips: Vec<String>, extensions: &Extensions) -> Vec<Map<String, Value>> {
    ips.into_iter()
        .map(|ip_address| {
            let mut record = Map::new();
            record.insert("ip_address".to_string(), Value::String(ip_address));

            extensions.apply_to_record(&mut record);

            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::{shape, DownloadIp};
    use crate::servers::apis::v1::extensions::{AdditionalFields, Extensions};

    #[test]
    fn download_ip_should_be_serialized_into_json() {
        let download_ip = DownloadIp::from("203.0.113.5".to_string());

        assert_eq!(
            serde_json::to_value(download_ip).unwrap(),
            json!({ "ip_address": "203.0.113.5" })
        );
    }

    #[test]
    fn it_should_shape_one_record_per_ip_address() {
        let records = shape(
            vec!["203.0.113.5".to_string(), "203.0.113.17".to_string()],
            &Extensions::default(),
        );

        assert_eq!(
            serde_json::to_value(records).unwrap(),
            json!([{ "ip_address": "203.0.113.5" }, { "ip_address": "203.0.113.17" }])
        );
    }

    struct CountryField;

    impl AdditionalFields for CountryField {
        fn extend_record(&self, record: &mut Map<String, Value>) {
            record.insert("country".to_string(), json!("ES"));
        }

        fn extend_schema(&self, properties: &mut Map<String, Value>) {
            properties.insert("country".to_string(), json!({ "type": "string" }));
        }
    }

    #[test]
    fn it_should_apply_the_extensions_to_every_record() {
        let mut extensions = Extensions::default();
        extensions.register(Box::new(CountryField));

        let records = shape(vec!["203.0.113.5".to_string()], &extensions);

        assert_eq!(
            serde_json::to_value(records).unwrap(),
            json!([{ "ip_address": "203.0.113.5", "country": "ES" }])
        );
    }
}
