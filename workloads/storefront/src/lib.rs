//! Storefront single-page app.
//!
//! Builds the storefront from the embedded `storefront.toml`, registers the
//! icon set and mounts [`App`] on `#app`.

mod app;
mod icon;

pub use app::*;
pub use icon::*;

use leptos::prelude::*;
use storefront_core::{StorefrontApp, StorefrontConfig};

/// Configuration compiled into the app.
pub const CONFIG: &str = include_str!("../storefront.toml");

/// The storefront with its embedded configuration and icon set, not yet built.
pub fn storefront_app() -> storefront_core::Result<StorefrontApp> {
    let config = StorefrontConfig::from_toml_str(CONFIG)?;

    Ok(IconKind::ALL
        .into_iter()
        .fold(StorefrontApp::from_config(config), |app, kind| {
            app.component(kind.component_name(), move || {
                view! { <Icon kind=kind/> }.into_any()
            })
        }))
}

/// Bootstrap the storefront into the browser document.
#[cfg(feature = "csr")]
pub fn start() -> storefront_core::Result<storefront_core::MountedStorefront> {
    let app = storefront_app()?;
    storefront_core::init_logging(&app.config().logging)?;
    app.build_from_env()?
        .mount(&mut storefront_core::BrowserHost::new(), App)
}
