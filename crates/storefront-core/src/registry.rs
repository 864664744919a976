//! Component registry.
//!
//! Auxiliary UI primitives (icons and the like) are registered by name while
//! the app is being built. Once bootstrap finishes the registry is sealed
//! and shared read-only with the view tree, where [`Registered`] looks names
//! up during rendering.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::{Result, StorefrontError};

/// Builds a fresh view for a registered component.
pub type ComponentFn = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// Name-keyed table of registered components.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentFn>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.names())
            .finish()
    }
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under a kebab-case name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        let name = name.into();
        if !is_component_name(&name) {
            return Err(StorefrontError::InvalidComponentName(name));
        }
        if self.components.contains_key(&name) {
            return Err(StorefrontError::DuplicateComponent(name));
        }

        tracing::trace!(component = %name, "component registered");
        self.components.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Look up a component by name.
    pub fn resolve(&self, name: &str) -> Result<ComponentFn> {
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| StorefrontError::UnknownComponent(name.to_string()))
    }

    /// Whether a component is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Lowercase ASCII words separated by single dashes, e.g. `icon-cart`.
fn is_component_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Sealed registry shared through context.
#[derive(Debug, Clone)]
pub struct Components(pub Arc<ComponentRegistry>);

/// The registry installed by the storefront root, if any.
pub fn use_components() -> Option<Arc<ComponentRegistry>> {
    use_context::<Components>().map(|c| c.0)
}

/// Render the component registered under `name`.
///
/// Unknown names render nothing and log a warning.
#[component]
pub fn Registered(#[prop(into)] name: String) -> impl IntoView {
    let resolved = match use_components() {
        Some(registry) => registry.resolve(&name),
        None => Err(StorefrontError::UnknownComponent(name.clone())),
    };

    match resolved {
        Ok(factory) => factory(),
        Err(err) => {
            tracing::warn!(component = %name, error = %err, "component not rendered");
            ().into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> AnyView {
        ().into_any()
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ComponentRegistry::new();
        registry.register("icon-cart", empty).unwrap();

        assert!(registry.contains("icon-cart"));
        assert!(registry.resolve("icon-cart").is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ComponentRegistry::new();
        let err = registry.resolve("icon-cart").err().unwrap();

        assert!(matches!(err, StorefrontError::UnknownComponent(name) if name == "icon-cart"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = ComponentRegistry::new();
        registry.register("icon", empty).unwrap();

        let err = registry.register("icon", empty).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateComponent(_)));
    }

    #[test]
    fn test_register_invalid_names() {
        let mut registry = ComponentRegistry::new();
        for name in ["", "Icon", "icon_cart", "-icon", "icon-", "icon--cart", "icon cart"] {
            let err = registry.register(name, empty).unwrap_err();
            assert!(
                matches!(err, StorefrontError::InvalidComponentName(_)),
                "{name:?} should be rejected"
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = ComponentRegistry::new();
        registry.register("icon-store", empty).unwrap();
        registry.register("font-awesome-icon", empty).unwrap();
        registry.register("icon-cart", empty).unwrap();

        assert_eq!(
            registry.names(),
            vec!["font-awesome-icon", "icon-cart", "icon-store"]
        );
    }

    #[test]
    fn test_use_components_without_root() {
        let owner = Owner::new();
        owner.with(|| assert!(use_components().is_none()));
    }
}
