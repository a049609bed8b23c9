//! Extension point for the v1 API resources.
//!
//! Embedding platforms can attach extra attributes to the records returned by
//! the API, for example a reverse-DNS name next to each IP address. An
//! extension contributes both the record attributes and their schema
//! declaration, so the payload and the discovery document never disagree.
//!
//! The default registry is empty; the API works without any extension.
use serde_json::{Map, Value};

/// Additional fields contributed by an embedding platform.
///
/// Implementations must keep [`extend_record`](AdditionalFields::extend_record)
/// and [`extend_schema`](AdditionalFields::extend_schema) consistent: every
/// attribute added to a record must be declared in the schema properties and
/// vice versa.
pub trait AdditionalFields: Send + Sync {
    /// It adds the extra attributes to one shaped record.
    fn extend_record(&self, record: &mut Map<String, Value>);

    /// It adds the extra attribute declarations to the item schema properties.
    fn extend_schema(&self, properties: &mut Map<String, Value>);
}

/// The registry of [`AdditionalFields`] applied to the API resources.
#[derive(Default)]
pub struct Extensions {
    fields: Vec<Box<dyn AdditionalFields>>,
}

impl Extensions {
    pub fn register(&mut self, fields: Box<dyn AdditionalFields>) {
        self.fields.push(fields);
    }

    /// It applies all the registered extensions to one shaped record.
    pub fn apply_to_record(&self, record: &mut Map<String, Value>) {
        for fields in &self.fields {
            fields.extend_record(record);
        }
    }

    /// It applies all the registered extensions to the item schema properties.
    pub fn apply_to_schema(&self, properties: &mut Map<String, Value>) {
        for fields in &self.fields {
            fields.extend_schema(properties);
        }
    }
}
