//! Storefront bootstrap.
//!
//! Wires a Leptos root view to the commerce platform client:
//!
//! 1. configuration is read from a file and/or the environment
//!    ([`StorefrontConfig`], [`env`]),
//! 2. the commerce client is built if a public key is configured
//!    ([`init_commerce`]),
//! 3. auxiliary components are registered ([`ComponentRegistry`]),
//! 4. the root view is mounted on a named anchor with every shared
//!    dependency installed as typed context ([`Storefront::mount`]).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let commerce = use_commerce();
//!     view! {
//!         <h1>{if commerce.is_enabled() { "Shop" } else { "Shop (offline)" }}</h1>
//!     }
//! }
//!
//! fn main() -> storefront_core::Result<()> {
//!     StorefrontApp::new("shop")
//!         .build_from_env()?
//!         .mount(&mut BrowserHost::new(), App)?;
//!     Ok(())
//! }
//! ```

pub mod env;
pub mod prelude;

mod app;
mod commerce;
mod config;
mod context;
mod diagnostics;
mod error;
mod host;
mod logging;
mod registry;

pub use app::*;
pub use commerce::*;
pub use config::*;
pub use context::*;
pub use diagnostics::*;
pub use error::*;
pub use host::*;
pub use logging::*;
pub use registry::*;

pub use storefront_commerce;
