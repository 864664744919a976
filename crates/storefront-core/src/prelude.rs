//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//! ```

// Leptos view macro and traits
pub use leptos::prelude::*;

// Leptos meta tags
pub use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};

// Storefront types
pub use crate::{
    init_logging, use_commerce, use_components, use_config, Commerce, HeadlessHost, Host,
    MountedStorefront, Registered, Storefront, StorefrontApp, StorefrontConfig, StorefrontError,
};

#[cfg(feature = "csr")]
pub use crate::BrowserHost;

pub use storefront_commerce::{CommerceClient, Merchant, PublicKey};
