//! Shared application dependencies.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commerce::Commerce;
use crate::config::StorefrontConfig;
use crate::diagnostics::Diagnostics;
use crate::registry::{ComponentRegistry, Components};

/// Shared configuration, as installed by the storefront root.
#[derive(Debug, Clone)]
pub struct SharedConfig(pub Arc<StorefrontConfig>);

/// Everything the view tree may depend on, built once at bootstrap.
///
/// The bootstrap hands this to the root view, which installs each part as
/// typed context with [`AppContext::provide`]. Components then resolve what
/// they need with [`use_commerce`](crate::use_commerce),
/// [`use_components`](crate::use_components) or [`use_config`].
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<StorefrontConfig>,
    commerce: Commerce,
    components: Arc<ComponentRegistry>,
    diagnostics: Diagnostics,
}

impl AppContext {
    pub fn new(
        config: StorefrontConfig,
        commerce: Commerce,
        components: ComponentRegistry,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            config: Arc::new(config),
            commerce,
            components: Arc::new(components),
            diagnostics,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn commerce(&self) -> &Commerce {
        &self.commerce
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Install the shared dependencies on the current reactive owner.
    pub fn provide(&self) {
        provide_context(SharedConfig(self.config.clone()));
        provide_context(self.commerce.clone());
        provide_context(Components(self.components.clone()));
    }
}

/// The configuration installed by the storefront root, if any.
pub fn use_config() -> Option<Arc<StorefrontConfig>> {
    use_context::<SharedConfig>().map(|c| c.0)
}
