//! Commerce platform client for the storefront.
//!
//! A [`CommerceClient`] is a cheap, clonable handle scoped to a storefront
//! [`PublicKey`]. Building one performs no network I/O; requests are only
//! issued when [`CommerceClient::send`] (or a typed helper such as
//! [`CommerceClient::merchant`]) is awaited.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::{ClientOptions, CommerceClient, PublicKey};
//!
//! let key = PublicKey::new("pk_test_123")?;
//! let client = CommerceClient::with_options(key, ClientOptions::default().with_debug(true))?;
//!
//! let merchant = client.merchant().await?;
//! println!("{}", merchant.business_name);
//! ```

mod error;
mod key;
mod request;
mod response;

use std::sync::Arc;

use reqwest::Url;
use serde::{Deserialize, Serialize};

pub use error::CommerceError;
pub use key::PublicKey;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// Default platform endpoint.
pub const DEFAULT_API_URL: &str = "https://api.chec.io/v1";

/// Header carrying the public key on every request.
pub const AUTH_HEADER: &str = "X-Authorization";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Options for constructing a [`CommerceClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Base URL of the platform API.
    pub api_url: String,
    /// Emit a trace event for every request and response.
    pub debug: bool,
    /// Request timeout in milliseconds. Ignored on wasm32, where the browser
    /// owns fetch timeouts.
    pub timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debug: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientOptions {
    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Enable or disable request tracing.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Merchant (store owner) details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: u64,
    pub business_name: String,
    #[serde(default)]
    pub support_email: Option<String>,
}

struct ClientInner {
    key: PublicKey,
    options: ClientOptions,
    base_url: Url,
    http: reqwest::Client,
}

/// Handle to the commerce platform.
///
/// Clones share a single allocation: [`CommerceClient::ptr_eq`] tells two
/// handles to the same client apart from two independently built clients.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for CommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceClient")
            .field("key", &self.inner.key)
            .field("options", &self.inner.options)
            .finish()
    }
}

impl CommerceClient {
    /// Create a client with default options.
    pub fn new(key: PublicKey) -> Result<Self, CommerceError> {
        Self::with_options(key, ClientOptions::default())
    }

    /// Create a client with explicit options.
    pub fn with_options(key: PublicKey, options: ClientOptions) -> Result<Self, CommerceError> {
        // Trailing slash so `Url::join` appends instead of replacing the
        // version segment.
        let base = format!("{}/", options.api_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| CommerceError::InvalidUrl(e.to_string()))?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(options.timeout_ms));
        let http = builder
            .build()
            .map_err(|e| CommerceError::ClientBuild(e.to_string()))?;

        tracing::debug!(
            sandbox = key.is_sandbox(),
            debug = options.debug,
            api_url = %base_url,
            "commerce client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                key,
                options,
                base_url,
                http,
            }),
        })
    }

    /// The public key this client authenticates with.
    pub fn public_key(&self) -> &PublicKey {
        &self.inner.key
    }

    /// The options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// Whether request tracing is enabled.
    pub fn is_debug(&self) -> bool {
        self.inner.options.debug
    }

    /// Whether both handles point at the same client.
    pub fn ptr_eq(&self, other: &CommerceClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Create a GET request for an endpoint path.
    pub fn get(&self, path: &str) -> Result<RequestBuilder, CommerceError> {
        self.request(Method::Get, path)
    }

    /// Create a POST request for an endpoint path.
    pub fn post(&self, path: &str) -> Result<RequestBuilder, CommerceError> {
        self.request(Method::Post, path)
    }

    /// Create a PUT request for an endpoint path.
    pub fn put(&self, path: &str) -> Result<RequestBuilder, CommerceError> {
        self.request(Method::Put, path)
    }

    /// Create a DELETE request for an endpoint path.
    pub fn delete(&self, path: &str) -> Result<RequestBuilder, CommerceError> {
        self.request(Method::Delete, path)
    }

    /// Create a request for an endpoint path relative to the API URL.
    ///
    /// Paths that resolve outside the API origin are refused so the public key
    /// is only ever sent to the configured host.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, CommerceError> {
        let base = &self.inner.base_url;
        let url = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| CommerceError::InvalidUrl(e.to_string()))?;
        if url.origin() != base.origin() {
            return Err(CommerceError::InvalidUrl(format!(
                "endpoint {path:?} is outside {base}"
            )));
        }

        Ok(RequestBuilder::new(method, url)
            .header(AUTH_HEADER, self.inner.key.as_str())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json"))
    }

    /// Send a request built by this client.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, CommerceError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = request;
        let debug = self.inner.options.debug;

        if debug {
            tracing::debug!(method = method.as_str(), url = %url, "commerce request");
        }

        let mut req = self.inner.http.request(method.to_reqwest(), url.clone());
        for (key, value) in &headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let headers = Response::collect_headers(resp.headers());
        let body = resp.bytes().await?.to_vec();

        if debug {
            tracing::debug!(status, url = %url, bytes = body.len(), "commerce response");
        }

        Ok(Response::new(status, headers, body))
    }

    /// Fetch the merchant that owns this key.
    pub async fn merchant(&self) -> Result<Merchant, CommerceError> {
        let request = self.get("merchants")?;
        self.send(request).await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ClientOptions, CommerceClient, CommerceError, Merchant, PublicKey};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CommerceClient {
        CommerceClient::new(PublicKey::new("pk_test_123").unwrap()).unwrap()
    }

    // === Construction Tests ===

    #[test]
    fn test_client_keeps_key() {
        let client = client();
        assert_eq!(client.public_key().as_str(), "pk_test_123");
        assert!(!client.is_debug());
        assert_eq!(client.options().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_client_debug_option() {
        let key = PublicKey::new("pk_test_123").unwrap();
        let client =
            CommerceClient::with_options(key, ClientOptions::default().with_debug(true)).unwrap();
        assert!(client.is_debug());
    }

    #[test]
    fn test_client_invalid_url() {
        let key = PublicKey::new("pk_test_123").unwrap();
        let options = ClientOptions::default().with_api_url("not a url");
        let err = CommerceClient::with_options(key, options).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_identity() {
        let a = client();
        let b = a.clone();
        let c = client();

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_debug_output_shows_key() {
        let output = format!("{:?}", client());
        assert!(output.contains("pk_test_123"));
    }

    // === Request Tests ===

    #[test]
    fn test_request_url_and_auth() {
        let req = client().get("/products").unwrap().query("limit", "10");

        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.url(), "https://api.chec.io/v1/products?limit=10");
        assert_eq!(req.header_value(AUTH_HEADER), Some("pk_test_123"));
        assert_eq!(req.header_value("accept"), Some("application/json"));
    }

    #[test]
    fn test_request_respects_custom_api_url() {
        let key = PublicKey::new("pk_1").unwrap();
        let options = ClientOptions::default().with_api_url("http://localhost:8080/v1/");
        let client = CommerceClient::with_options(key, options).unwrap();

        let req = client.post("carts/cart_1").unwrap();
        assert_eq!(req.url(), "http://localhost:8080/v1/carts/cart_1");
        assert_eq!(req.method(), Method::Post);
    }

    #[test]
    fn test_request_rejects_foreign_origin() {
        let client = client();

        for path in ["https://other.host/x", "http://api.chec.io/v1/products"] {
            assert!(
                matches!(client.get(path), Err(CommerceError::InvalidUrl(_))),
                "{path}"
            );
        }

        // Leading slashes are stripped, so this stays under the API URL.
        let req = client.get("//other.host/x").unwrap();
        assert_eq!(req.url(), "https://api.chec.io/v1/other.host/x");
    }

    #[test]
    fn test_client_options_deserialize_defaults() {
        let options: ClientOptions = serde_json::from_str(r#"{"debug": true}"#).unwrap();
        assert!(options.debug);
        assert_eq!(options.api_url, DEFAULT_API_URL);
        assert_eq!(options.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_merchant_deserialize() {
        let merchant: Merchant =
            serde_json::from_str(r#"{"id": 1, "business_name": "Beige & Co", "extra": true}"#)
                .unwrap();
        assert_eq!(merchant.business_name, "Beige & Co");
        assert!(merchant.support_email.is_none());
    }

    // === Send Tests ===

    #[tokio::test]
    async fn test_send_connection_refused() {
        let key = PublicKey::new("pk_test_123").unwrap();
        let options = ClientOptions::default()
            .with_api_url("http://127.0.0.1:9/v1")
            .with_timeout_ms(2_000);
        let client = CommerceClient::with_options(key, options).unwrap();

        let err = client.merchant().await.unwrap_err();
        assert!(matches!(err, CommerceError::Request(_)));
    }
}
