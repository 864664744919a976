//! Mount hosts.
//!
//! A [`Host`] owns the document the storefront attaches to. In the browser
//! that is the real DOM ([`BrowserHost`], `csr` feature); [`HeadlessHost`]
//! runs the root view under its own reactive owner without a DOM, for tests
//! and embedding.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::{Result, StorefrontError};

/// Something a root view can be mounted into.
pub trait Host {
    /// Attach `root` under the element whose id is `anchor`.
    ///
    /// Fails with [`StorefrontError::MountTargetMissing`] if no such element
    /// exists and with [`StorefrontError::AlreadyMounted`] if a root is
    /// already attached there.
    fn attach<F, V>(&mut self, anchor: &str, root: F) -> Result<()>
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static;
}

/// A host without a DOM.
///
/// Anchors are declared up front; attaching runs the root under a fresh
/// reactive owner that stays alive for the lifetime of the host.
#[derive(Default)]
pub struct HeadlessHost {
    anchors: HashSet<String>,
    mounted: HashMap<String, Owner>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an element id that can be mounted on.
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.insert(id.into());
        self
    }

    /// Whether a root is attached to `anchor`.
    pub fn is_mounted(&self, anchor: &str) -> bool {
        self.mounted.contains_key(anchor)
    }

    /// The reactive owner the root on `anchor` runs under.
    pub fn owner(&self, anchor: &str) -> Option<&Owner> {
        self.mounted.get(anchor)
    }
}

impl Host for HeadlessHost {
    fn attach<F, V>(&mut self, anchor: &str, root: F) -> Result<()>
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        if !self.anchors.contains(anchor) {
            return Err(StorefrontError::MountTargetMissing(anchor.to_string()));
        }
        if self.mounted.contains_key(anchor) {
            return Err(StorefrontError::AlreadyMounted(anchor.to_string()));
        }

        let owner = Owner::new();
        let _view = owner.with(root);
        self.mounted.insert(anchor.to_string(), owner);
        Ok(())
    }
}

#[cfg(feature = "csr")]
pub use browser::BrowserHost;

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::IntoView;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use super::Host;
    use crate::{Result, StorefrontError};

    /// Marks an element that already carries a storefront root.
    const MOUNTED_ATTR: &str = "data-storefront-mounted";

    /// The browser document.
    #[derive(Debug, Default)]
    pub struct BrowserHost;

    impl BrowserHost {
        pub fn new() -> Self {
            Self
        }
    }

    impl Host for BrowserHost {
        fn attach<F, V>(&mut self, anchor: &str, root: F) -> Result<()>
        where
            F: FnOnce() -> V + 'static,
            V: IntoView + 'static,
        {
            let missing = || StorefrontError::MountTargetMissing(anchor.to_string());

            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(anchor))
                .ok_or_else(missing)?;

            if element.has_attribute(MOUNTED_ATTR) {
                return Err(StorefrontError::AlreadyMounted(anchor.to_string()));
            }
            let element: HtmlElement = element.dyn_into().map_err(|_| missing())?;
            if element.set_attribute(MOUNTED_ATTR, "").is_err() {
                tracing::warn!(anchor, "could not mark mount anchor");
            }

            leptos::mount::mount_to(element, root).forget();
            Ok(())
        }
    }
}
