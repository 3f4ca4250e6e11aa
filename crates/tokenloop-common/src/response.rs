//! The uniform outcome of one HTTP call against the protect/reveal API.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single HTTP call, created once per request and immutable
/// thereafter.
///
/// HTTP error statuses (4xx/5xx) are ordinary responses here, with the
/// error body preserved for inspection. A transport-level failure with no
/// HTTP response at all carries `status: None` and the error's text as
/// its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code; absent when no response was obtained.
    pub status: Option<u16>,
    /// Decoded JSON body, or the raw text when the body was not JSON.
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub const fn new(status: Option<u16>, body: Value) -> Self {
        Self { status, body }
    }

    /// Transport-level failure: no status, the error description as body.
    #[must_use]
    pub fn transport_failure(error: impl fmt::Display) -> Self {
        Self {
            status: None,
            body: Value::String(error.to_string()),
        }
    }

    /// Whether a status code is present and in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, Some(status) if status >= 200 && status < 300)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn two_hundreds_are_success() {
        assert!(ApiResponse::new(Some(200), Value::Null).is_success());
        assert!(ApiResponse::new(Some(204), Value::Null).is_success());
        assert!(ApiResponse::new(Some(299), Value::Null).is_success());
    }

    #[test]
    fn other_statuses_are_not_success() {
        assert!(!ApiResponse::new(Some(199), Value::Null).is_success());
        assert!(!ApiResponse::new(Some(301), Value::Null).is_success());
        assert!(!ApiResponse::new(Some(404), Value::Null).is_success());
        assert!(!ApiResponse::new(Some(500), Value::Null).is_success());
    }

    #[test]
    fn absent_status_is_not_success() {
        let response = ApiResponse::transport_failure("connection refused");
        assert!(!response.is_success());
        assert_eq!(response.status, None);
        assert_eq!(response.body, json!("connection refused"));
    }

    #[test]
    fn error_bodies_are_preserved() {
        let response = ApiResponse::new(Some(500), json!({"error": "server error"}));
        assert!(!response.is_success());
        assert_eq!(response.body["error"], "server error");
    }
}
