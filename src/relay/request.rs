//! Inbound request parsing and field resolution.
//!
//! # Responsibilities
//! - Deserialize the inbound JSON body into typed fields
//! - Resolve each field to a string (structured values get JSON-encoded)
//! - Reject requests with missing or empty required fields
//!
//! # Design Decisions
//! - Fields are an untagged String/Json union rather than runtime type
//!   inspection; serde picks the variant during deserialization
//! - Resolution happens once; the resolved strings are used for both the
//!   signature and the outbound payload so the two can never diverge
//! - `body` is optional and defaults to the empty string

use serde::Deserialize;
use serde_json::Value;

use crate::error::{RelayError, RelayResult};

/// A single inbound field: either plain text or structured JSON.
///
/// Structured values are serialized back to a JSON string when resolved,
/// matching how callers that send nested objects expect them forwarded.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain string, passed through unchanged.
    Text(String),
    /// Any non-string JSON value (object, array, number, bool, null).
    Structured(Value),
}

impl FieldValue {
    /// Resolve the field to the string that goes on the wire.
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Structured(v) => v.to_string(),
        }
    }
}

/// The raw inbound request as deserialized from the caller's JSON body.
///
/// All fields are optional at the serde level so that validation can name
/// the missing field instead of failing with a generic deserialize error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundRequest {
    pub method: Option<FieldValue>,
    pub protocol: Option<FieldValue>,
    pub key: Option<FieldValue>,
    pub uri: Option<FieldValue>,
    pub controller: Option<FieldValue>,
    pub action: Option<FieldValue>,
    pub body: Option<FieldValue>,
}

/// A fully validated request with every field resolved to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: String,
    pub protocol: String,
    pub key: String,
    pub uri: String,
    pub controller: String,
    pub action: String,
    pub body: String,
}

impl InboundRequest {
    /// Validate presence of all required fields and resolve them.
    ///
    /// Required: method, protocol, key, uri, controller, action. An empty
    /// string counts as missing. `body` defaults to the empty string.
    pub fn resolve(&self) -> RelayResult<ResolvedRequest> {
        Ok(ResolvedRequest {
            method: required(&self.method, "method")?,
            protocol: required(&self.protocol, "protocol")?,
            key: required(&self.key, "key")?,
            uri: required(&self.uri, "uri")?,
            controller: required(&self.controller, "controller")?,
            action: required(&self.action, "action")?,
            body: self.body.as_ref().map(FieldValue::resolve).unwrap_or_default(),
        })
    }
}

fn required(field: &Option<FieldValue>, name: &'static str) -> RelayResult<String> {
    match field {
        Some(value) => {
            let resolved = value.resolve();
            if resolved.is_empty() {
                Err(RelayError::MissingField(name))
            } else {
                Ok(resolved)
            }
        }
        None => Err(RelayError::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> InboundRequest {
        serde_json::from_value(json!({
            "method": "POST",
            "protocol": "https",
            "key": "abc",
            "uri": "api.example.com",
            "controller": "users",
            "action": "list",
            "body": "{}"
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_full_request() {
        let resolved = full_request().resolve().unwrap();
        assert_eq!(resolved.method, "POST");
        assert_eq!(resolved.uri, "api.example.com");
        assert_eq!(resolved.body, "{}");
    }

    #[test]
    fn test_missing_field_rejected() {
        let req: InboundRequest = serde_json::from_value(json!({
            "method": "GET",
            "protocol": "https",
            "uri": "api.example.com",
            "controller": "users",
            "action": "list"
        }))
        .unwrap();

        let err = req.resolve().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: key");
    }

    #[test]
    fn test_empty_field_counts_as_missing() {
        let mut req = full_request();
        req.action = Some(FieldValue::Text(String::new()));
        let err = req.resolve().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: action");
    }

    #[test]
    fn test_body_defaults_to_empty() {
        let mut req = full_request();
        req.body = None;
        assert_eq!(req.resolve().unwrap().body, "");
    }

    #[test]
    fn test_structured_body_is_json_encoded() {
        let req: InboundRequest = serde_json::from_value(json!({
            "method": "POST",
            "protocol": "https",
            "key": "abc",
            "uri": "api.example.com",
            "controller": "users",
            "action": "create",
            "body": {"name": "alice", "tags": [1, 2]}
        }))
        .unwrap();

        let resolved = req.resolve().unwrap();
        let round_trip: serde_json::Value = serde_json::from_str(&resolved.body).unwrap();
        assert_eq!(round_trip, json!({"name": "alice", "tags": [1, 2]}));
    }

    #[test]
    fn test_numeric_field_resolves_to_digits() {
        let value: FieldValue = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(value.resolve(), "42");
    }
}
