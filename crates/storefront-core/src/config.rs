//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_commerce::{ClientOptions, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};

use crate::env::{self, EnvSource};
use crate::logging::LoggingConfig;
use crate::{Result, StorefrontError};

/// Default element id the root view mounts on.
pub const DEFAULT_MOUNT_ANCHOR: &str = "app";

/// Configuration for a storefront application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name.
    pub name: String,
    /// Default page title.
    pub title: String,
    /// Global stylesheet path.
    pub css_path: Option<String>,
    /// Id of the element the root view attaches to.
    pub mount_anchor: String,
    /// Log a development-mode hint at startup.
    pub production_tip: bool,
    /// Commerce platform settings.
    pub commerce: CommerceConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "storefront".to_string(),
            title: "Storefront".to_string(),
            css_path: None,
            mount_anchor: DEFAULT_MOUNT_ANCHOR.to_string(),
            production_tip: false,
            commerce: CommerceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Commerce platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceConfig {
    /// Public API key. `None` disables commerce features.
    pub public_key: Option<String>,
    /// Trace every platform request and response.
    pub debug: bool,
    /// Platform API base URL.
    pub api_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            debug: false,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl CommerceConfig {
    /// Client options derived from this configuration.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::default()
            .with_api_url(self.api_url.clone())
            .with_debug(self.debug)
            .with_timeout_ms(self.timeout_ms)
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("Invalid TOML config: {}", e)))
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("Invalid JSON config: {}", e)))
    }

    /// Overlay environment variables. Set variables win over file values;
    /// unset variables leave the file value untouched.
    pub fn apply_env(mut self, source: &impl EnvSource) -> Result<Self> {
        if let Some(key) = env::public_key(source) {
            self.commerce.public_key = Some(key);
        }

        if let Some(raw) = source.var(env::DEBUG_VAR) {
            self.commerce.debug = env::parse_flag(&raw).ok_or_else(|| {
                StorefrontError::Config(format!(
                    "{} must be a boolean, got {:?}",
                    env::DEBUG_VAR,
                    raw
                ))
            })?;
        }

        Ok(self)
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Set the mount anchor id.
    pub fn with_mount_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.mount_anchor = anchor.into();
        self
    }

    /// Set the commerce public key.
    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.commerce.public_key = Some(key.into());
        self
    }

    /// Enable or disable commerce request tracing.
    pub fn with_commerce_debug(mut self, enabled: bool) -> Self {
        self.commerce.debug = enabled;
        self
    }

    /// Enable or disable the startup development hint.
    pub fn with_production_tip(mut self, enabled: bool) -> Self {
        self.production_tip = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, DEBUG_VAR, LEGACY_PUBLIC_KEY_VAR, PUBLIC_KEY_VAR};
    use crate::logging::LogFormat;

    // === StorefrontConfig Tests ===

    #[test]
    fn test_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.name, "storefront");
        assert_eq!(config.mount_anchor, "app");
        assert!(!config.production_tip);
        assert!(config.css_path.is_none());
        assert!(config.commerce.public_key.is_none());
        assert!(!config.commerce.debug);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new("Shop")
            .with_title("My Shop")
            .with_css("/style/main.css")
            .with_mount_anchor("root")
            .with_public_key("pk_test_1")
            .with_commerce_debug(true)
            .with_production_tip(true);

        assert_eq!(config.name, "Shop");
        assert_eq!(config.title, "My Shop");
        assert_eq!(config.css_path.as_deref(), Some("/style/main.css"));
        assert_eq!(config.mount_anchor, "root");
        assert_eq!(config.commerce.public_key.as_deref(), Some("pk_test_1"));
        assert!(config.commerce.debug);
        assert!(config.production_tip);
    }

    #[test]
    fn test_config_from_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            name = "beige"
            css_path = "/style/main.css"

            [commerce]
            debug = true

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "beige");
        assert_eq!(config.title, "Storefront");
        assert!(config.commerce.debug);
        assert!(config.commerce.public_key.is_none());
        assert_eq!(config.commerce.api_url, DEFAULT_API_URL);
        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Json));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            StorefrontConfig::from_json_str(r#"{"commerce": {"public_key": "pk_1"}}"#).unwrap();
        assert_eq!(config.commerce.public_key.as_deref(), Some("pk_1"));
    }

    #[test]
    fn test_config_invalid_toml() {
        let err = StorefrontConfig::from_toml_str("name = [").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn test_config_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "storefront-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "title = \"From File\"\n").unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.title, "From File");
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = StorefrontConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    // === Environment Overlay Tests ===

    #[test]
    fn test_apply_env_sets_key() {
        let env = MapEnv::new().with(PUBLIC_KEY_VAR, "pk_test_123");
        let config = StorefrontConfig::default().apply_env(&env).unwrap();

        assert_eq!(config.commerce.public_key.as_deref(), Some("pk_test_123"));
    }

    #[test]
    fn test_apply_env_unset_keeps_file_value() {
        let config = StorefrontConfig::default()
            .with_public_key("pk_file")
            .apply_env(&MapEnv::new())
            .unwrap();

        assert_eq!(config.commerce.public_key.as_deref(), Some("pk_file"));
    }

    #[test]
    fn test_apply_env_overrides_file_value() {
        let env = MapEnv::new().with(LEGACY_PUBLIC_KEY_VAR, "pk_env");
        let config = StorefrontConfig::default()
            .with_public_key("pk_file")
            .apply_env(&env)
            .unwrap();

        assert_eq!(config.commerce.public_key.as_deref(), Some("pk_env"));
    }

    #[test]
    fn test_apply_env_debug_flag() {
        let env = MapEnv::new().with(DEBUG_VAR, "true");
        let config = StorefrontConfig::default().apply_env(&env).unwrap();
        assert!(config.commerce.debug);

        let env = MapEnv::new().with(DEBUG_VAR, "sometimes");
        let err = StorefrontConfig::default().apply_env(&env).unwrap_err();
        assert!(err.to_string().contains(DEBUG_VAR));
    }

    #[test]
    fn test_client_options_from_commerce_config() {
        let config = CommerceConfig {
            debug: true,
            timeout_ms: 500,
            ..Default::default()
        };
        let options = config.client_options();

        assert!(options.debug);
        assert_eq!(options.timeout_ms, 500);
        assert_eq!(options.api_url, DEFAULT_API_URL);
    }
}
