//! Public API key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CommerceError;

/// Prefix the platform uses for sandbox (test-mode) keys.
const SANDBOX_PREFIX: &str = "pk_test_";

/// A storefront-scoped public API key.
///
/// Public keys are not secrets: they only authorize read-only catalog and
/// cart operations and are shipped to the browser as-is. The wrapped string
/// is kept exactly as supplied, whitespace included; only the empty string
/// is refused, so a client can never be built around an empty key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(String);

impl PublicKey {
    /// Wrap a key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Result<Self, CommerceError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CommerceError::EmptyPublicKey);
        }
        Ok(Self(key))
    }

    /// The key as sent in the `X-Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a sandbox key (`pk_test_...`).
    pub fn is_sandbox(&self) -> bool {
        self.0.starts_with(SANDBOX_PREFIX)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PublicKey {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}
