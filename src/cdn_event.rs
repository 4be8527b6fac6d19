use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Response headers, keyed by header name.  The platform allows
/// several values per name, so each maps to a list of entries.
pub type Headers = BTreeMap<String, Vec<HeaderEntry>>;

/// The invocation envelope handed to an edge function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Records")]
    pub records: Vec<Record>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub cf: CfRecord,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The CDN part of a record.  A request-phase event only carries a
/// `request`; a response-phase event carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<EdgeRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<EdgeResponse>,
    /// `config` and anything else the platform sends along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request on its way to the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRequest {
    pub uri: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A response on its way back to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: Headers,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One value of a header.  `key` holds the header name in its
/// original case and may be left out by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

/// An envelope which cannot be handled.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event has no records")]
    NoRecords,
    #[error("record has no request")]
    MissingRequest,
    #[error("record has no response")]
    MissingResponse,
    #[error("record has neither a request nor a response")]
    MissingPayload,
    #[error("request uri is empty")]
    EmptyUri,
}

impl Event {
    /// Parse an envelope from its JSON form.
    pub fn from_json(json: &str) -> Result<Event, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Take the CDN part of the first record, which is the only one
    /// the platform ever sends.
    pub fn into_cf(self) -> Result<CfRecord, EventError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf)
            .ok_or(EventError::NoRecords)
    }
}

impl EdgeRequest {
    pub fn new(uri: &str) -> EdgeRequest {
        EdgeRequest {
            uri: uri.to_string(),
            extra: Map::new(),
        }
    }
}

impl EdgeResponse {
    /// Replace every value of `name` with a single entry.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.to_string(), vec![HeaderEntry::new(name, value)]);
    }
}

impl HeaderEntry {
    pub fn new(key: &str, value: &str) -> HeaderEntry {
        HeaderEntry {
            key: Some(key.to_string()),
            value: value.to_string(),
        }
    }
}

/// Treat `"headers": null` the same as a missing header map.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Headers, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Headers>::deserialize(deserializer)?.unwrap_or_default())
}
