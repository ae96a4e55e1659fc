// Error types for the client: transport failures and the structured
// validation envelope returned by the service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level failure captured while executing a call.
///
/// These are never returned as `Err` from the facade; they ride inside the
/// [`ClientResponse`](crate::client::rest::ClientResponse) so the caller can
/// branch on the whole outcome in one place.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The connection could not be established (DNS, refused, TLS).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// The server responded but the body could not be parsed as the
    /// expected JSON shape.
    #[error("failed to parse response body: {0}")]
    MalformedResponse(String),

    /// The base URL and path could not be combined into a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Triage a reqwest send failure into the matching variant.
    pub(crate) fn from_send_error(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout(error.to_string())
        } else if error.is_connect() {
            ClientError::Connect(error.to_string())
        } else {
            ClientError::Request(error.to_string())
        }
    }
}

/// One validation problem reported by the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorDetail {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The structured error envelope the service returns on any validation or
/// business failure. Field errors are keyed by the JSON path of the field
/// that failed; general errors apply to the request as a whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Errors {
    pub field_errors: BTreeMap<String, Vec<ErrorDetail>>,
    pub general_errors: Vec<ErrorDetail>,
}

impl Errors {
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.general_errors.is_empty()
    }

    /// Total number of problems across both sections.
    pub fn size(&self) -> usize {
        self.general_errors.len() + self.field_errors.values().map(Vec::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_error_variants_format() {
        let err = ClientError::Connect("connection refused".to_string());
        assert!(err.to_string().contains("connection failed"));

        let err = ClientError::Timeout("deadline elapsed".to_string());
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_errors_envelope_parses_wire_shape() {
        let json = r#"{
            "fieldErrors": {
                "user.email": [
                    {"code": "[blank]user.email", "message": "Email is required"}
                ]
            },
            "generalErrors": [
                {"code": "[invalid]", "message": "The request was invalid"}
            ]
        }"#;

        let errors: Errors = serde_json::from_str(json).unwrap();
        assert_eq!(errors.size(), 2);
        assert_eq!(
            errors.field_errors["user.email"][0].code,
            "[blank]user.email"
        );
        assert_eq!(errors.general_errors[0].message, "The request was invalid");
    }

    #[test]
    fn test_errors_envelope_defaults_when_sections_missing() {
        let errors: Errors = serde_json::from_str("{}").unwrap();
        assert!(errors.is_empty());
        assert_eq!(errors.size(), 0);
    }
}
