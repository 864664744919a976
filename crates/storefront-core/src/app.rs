//! Storefront application builder and bootstrap.

use leptos::prelude::*;

use crate::commerce::{init_commerce, Commerce};
use crate::config::StorefrontConfig;
use crate::context::AppContext;
use crate::diagnostics::Diagnostics;
use crate::env::{DefaultEnv, EnvSource};
use crate::host::Host;
use crate::registry::ComponentRegistry;
use crate::Result;

type PendingComponent = (String, Box<dyn Fn() -> AnyView + Send + Sync>);

/// Storefront application builder.
///
/// # Example
///
/// ```rust,ignore
/// let storefront = StorefrontApp::new("beige")
///     .with_title("Beige")
///     .with_css("/style/main.css")
///     .component("icon-cart", || view! { <Icon kind=IconKind::Cart/> }.into_any())
///     .build_from_env()?;
///
/// storefront.mount(&mut BrowserHost::new(), App)?;
/// ```
pub struct StorefrontApp {
    config: StorefrontConfig,
    components: Vec<PendingComponent>,
}

impl StorefrontApp {
    /// Create a new app with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(StorefrontConfig::new(name))
    }

    /// Start from an existing configuration.
    pub fn from_config(config: StorefrontConfig) -> Self {
        Self {
            config,
            components: Vec::new(),
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config = self.config.with_title(title);
        self
    }

    /// Set the global stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_css(path);
        self
    }

    /// Set the mount anchor id.
    pub fn with_mount_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.config = self.config.with_mount_anchor(anchor);
        self
    }

    /// Enable or disable the startup development hint.
    pub fn with_production_tip(mut self, enabled: bool) -> Self {
        self.config = self.config.with_production_tip(enabled);
        self
    }

    /// Register an auxiliary component. Names are validated by [`build`](Self::build).
    pub fn component<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        self.components.push((name.into(), Box::new(factory)));
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Build using the environment the running target can see.
    pub fn build_from_env(self) -> Result<Storefront> {
        self.build(&DefaultEnv::default())
    }

    /// Resolve configuration, register components, apply diagnostics and
    /// build the commerce client.
    ///
    /// Any failure aborts the bootstrap; nothing is retried.
    pub fn build(self, env: &impl EnvSource) -> Result<Storefront> {
        let config = self.config.apply_env(env)?;

        let mut components = ComponentRegistry::new();
        for (name, factory) in self.components {
            components.register(name, factory)?;
        }

        let diagnostics = Diagnostics::from_config(&config);
        diagnostics.install();

        let commerce = Commerce::from(init_commerce(&config.commerce)?);

        tracing::info!(
            app = %config.name,
            commerce = commerce.is_enabled(),
            components = components.len(),
            "storefront configured"
        );

        Ok(Storefront {
            context: AppContext::new(config, commerce, components, diagnostics),
        })
    }
}

/// A configured storefront that has not been mounted yet.
#[derive(Debug)]
pub struct Storefront {
    context: AppContext,
}

impl Storefront {
    /// The dependencies that will be shared with the view tree.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Mount `root` on the configured anchor.
    ///
    /// The shared dependencies are installed on the root's owner before
    /// `root` runs, so every component below it can resolve them.
    pub fn mount<H, F, V>(self, host: &mut H, root: F) -> Result<MountedStorefront>
    where
        H: Host,
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        let anchor = self.context.config().mount_anchor.clone();
        let context = self.context.clone();

        host.attach(&anchor, move || {
            context.provide();
            root()
        })?;

        tracing::info!(anchor = %anchor, "storefront mounted");
        Ok(MountedStorefront {
            context: self.context,
        })
    }
}

/// A storefront attached to its host document.
#[derive(Debug)]
pub struct MountedStorefront {
    context: AppContext,
}

impl MountedStorefront {
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn anchor(&self) -> &str {
        &self.context.config().mount_anchor
    }
}
