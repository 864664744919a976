//! Request construction for platform calls.

use std::collections::BTreeMap;

use reqwest::Url;
use serde::Serialize;

use crate::CommerceError;

/// HTTP methods accepted by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A platform request under construction.
///
/// Obtained from [`CommerceClient::request`](crate::CommerceClient::request)
/// and friends, which pre-populate the endpoint URL and the authorization
/// headers.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub(crate) fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.url.query_pairs_mut().append_pair(key, value.as_ref());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, CommerceError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The fully resolved URL, including query parameters.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(
            Method::Get,
            Url::parse("https://api.example.com/v1/products").unwrap(),
        )
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
        assert_eq!(Method::Patch.to_reqwest(), reqwest::Method::PATCH);
    }

    #[test]
    fn test_query_is_encoded() {
        let req = builder().query("limit", "25").query("query", "blue shirt");
        assert_eq!(
            req.url(),
            "https://api.example.com/v1/products?limit=25&query=blue+shirt"
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = builder().header("X-Custom", "yes");
        assert_eq!(req.header_value("x-custom"), Some("yes"));
        assert_eq!(req.header_value("missing"), None);
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Line {
            id: &'static str,
            quantity: u32,
        }

        let req = builder()
            .json(&Line {
                id: "prod_1",
                quantity: 2,
            })
            .unwrap();

        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body(), Some(br#"{"id":"prod_1","quantity":2}"#.as_slice()));
    }
}
