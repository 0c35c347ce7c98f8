use serde::{de::IgnoredAny, Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// Envelope wrapping every successful backend response
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub timestamp: Option<String>,
}

///
/// Response of endpoints whose data the client never reads
///
pub type EmptyResponse = ApiResponse<IgnoredAny>;

impl<T> ApiResponse<T> {
    ///
    /// Used for `204 No Content` responses
    ///
    pub fn empty() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
            timestamp: None,
        }
    }
}

///
/// Envelope of every non 2xx backend response
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorEnvelope {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub success: bool,
    pub status_code: Option<u16>,
    pub status_text: Option<String>,
    pub timestamp: Option<String>,

    ///
    /// Raw per-field error codes, keyed by field path
    /// (e.g. `userData.email`)
    ///
    pub errors: Option<BTreeMap<String, Value>>,
    pub constraint_name: Option<String>,

    ///
    /// Per-field messages precomputed by the backend
    ///
    pub friendly_errors: Option<BTreeMap<String, String>>,
}

impl ApiErrorEnvelope {
    pub fn has_field_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_envelope_json_deserialize_ok() {
        let json = r#"{
            "code": "VALIDATION_ERROR",
            "message": "Validation failed",
            "success": false,
            "statusCode": 400,
            "statusText": "Bad Request",
            "timestamp": "2025-03-01T10:00:00Z",
            "errors": { "email": "EMAIL_INVALID", "tickets": ["A", "B"] }
        }"#;

        let envelope = serde_json::from_str::<ApiErrorEnvelope>(json).unwrap();

        assert_eq!(envelope.code.as_deref(), Some("VALIDATION_ERROR"));
        assert_eq!(envelope.status_code, Some(400));
        assert!(envelope.has_field_errors());
        assert!(envelope.friendly_errors.is_none());
    }

    #[test]
    fn error_envelope_without_errors() {
        let json = r#"{ "code": "NOT_FOUND", "statusCode": 404 }"#;

        let envelope = serde_json::from_str::<ApiErrorEnvelope>(json).unwrap();

        assert!(!envelope.has_field_errors());
    }

    #[test]
    fn response_without_data() {
        let json = r#"{ "success": true, "message": "Logged out", "timestamp": "2025-03-01T10:00:00Z" }"#;

        let response = serde_json::from_str::<EmptyResponse>(json).unwrap();

        assert!(response.success);
        assert!(response.data.is_none());
    }
}
