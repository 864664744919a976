//! Platform response handling.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::CommerceError;

/// A platform response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// Error envelope returned by the platform on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Collect transport headers. Values that are not valid UTF-8 are kept
    /// lossily rather than dropped.
    pub(crate) fn collect_headers(map: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        map.iter()
            .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect()
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, CommerceError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| CommerceError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, CommerceError> {
        serde_json::from_slice(&self.body).map_err(|e| CommerceError::Parse(e.to_string()))
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The platform's `{"error": {"message": ...}}` envelope is unwrapped
    /// when present; otherwise the raw body is used as the message.
    pub fn error_for_status(self) -> Result<Self, CommerceError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = match serde_json::from_slice::<ErrorEnvelope>(&self.body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => self.text().unwrap_or_else(|_| "Unknown error".to_string()),
        };
        Err(CommerceError::Http {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(401, b"").is_success());
    }

    // === Body Tests ===

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(resp.text(), Err(CommerceError::Parse(_))));
    }

    #[test]
    fn test_response_json() {
        #[derive(Deserialize)]
        struct Merchant {
            id: u64,
        }

        let resp = make_response(200, br#"{"id": 18462}"#);
        let merchant: Merchant = resp.json().unwrap();
        assert_eq!(merchant.id, 18462);
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = Response::new(200, headers, Vec::new());

        assert_eq!(resp.header("content-type"), Some("application/json"));
    }

    // === Error Tests ===

    #[test]
    fn test_collect_headers_keeps_non_ascii_values() {
        use reqwest::header::{HeaderMap, HeaderValue};

        let mut map = HeaderMap::new();
        map.insert("x-shop", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        map.insert("content-type", HeaderValue::from_static("application/json"));

        let headers = Response::collect_headers(&map);
        assert_eq!(headers["x-shop"], "caf\u{fffd}");
        assert_eq!(headers["content-type"], "application/json");
    }

    #[test]
    fn test_error_for_status_ok() {
        assert!(make_response(200, b"{}").error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_unwraps_platform_envelope() {
        let body = br#"{
            "status_code": 401,
            "error": {"message": "You did not provide an API key.", "type": "authentication_error"}
        }"#;
        let err = make_response(401, body).error_for_status().unwrap_err();

        match err {
            CommerceError::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "You did not provide an API key.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_for_status_raw_body() {
        let err = make_response(502, b"Bad Gateway").error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }
}
