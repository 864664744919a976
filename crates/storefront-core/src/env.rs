//! Environment reader.
//!
//! The storefront reads its commerce settings from process-wide
//! environment values. In the browser there is no process environment, so
//! [`BuildEnv`] captures the same variables at compile time, the way bundlers
//! inline `VUE_APP_*`/`PUBLIC_*` values into client bundles.

use std::collections::HashMap;

/// Public API key variable.
pub const PUBLIC_KEY_VAR: &str = "CHEC_PUBLIC_KEY";

/// Alias for [`PUBLIC_KEY_VAR`] kept for existing deployments.
pub const LEGACY_PUBLIC_KEY_VAR: &str = "VUE_APP_CHEC_PUBLIC_KEY";

/// Toggles request tracing on the commerce client.
pub const DEBUG_VAR: &str = "CHEC_DEBUG";

/// A source of configuration variables.
pub trait EnvSource {
    /// Look up a variable. `None` means unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Variables from the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(name).ok()
    }
}

/// Variables captured when the crate was compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl EnvSource for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            PUBLIC_KEY_VAR => option_env!("CHEC_PUBLIC_KEY"),
            LEGACY_PUBLIC_KEY_VAR => option_env!("VUE_APP_CHEC_PUBLIC_KEY"),
            DEBUG_VAR => option_env!("CHEC_DEBUG"),
            _ => None,
        };
        value.map(String::from)
    }
}

/// In-memory variables, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// The environment the running target can actually see.
#[cfg(target_arch = "wasm32")]
pub type DefaultEnv = BuildEnv;

/// The environment the running target can actually see.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultEnv = ProcessEnv;

/// Read the public key, preferring [`PUBLIC_KEY_VAR`] over the legacy alias.
///
/// A variable that is set but empty still counts as set; whether such a key
/// is usable is decided when the client is built.
pub fn public_key(env: &impl EnvSource) -> Option<String> {
    env.var(PUBLIC_KEY_VAR).or_else(|| env.var(LEGACY_PUBLIC_KEY_VAR))
}

/// Parse a boolean flag value. Returns `None` for unrecognized input.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
