//! Commerce client initialization and access.

use leptos::prelude::*;
use storefront_commerce::{CommerceClient, CommerceError, PublicKey};

use crate::config::CommerceConfig;

/// Build the commerce client, if a public key is configured.
///
/// An unset key is not an error: commerce is simply disabled and `None` is
/// returned. A configured key is used verbatim; building fails only if the
/// key is empty or the client options are unusable.
pub fn init_commerce(config: &CommerceConfig) -> Result<Option<CommerceClient>, CommerceError> {
    let Some(raw) = config.public_key.as_deref() else {
        tracing::info!("no public key configured, commerce disabled");
        return Ok(None);
    };

    let key = PublicKey::new(raw)?;
    let client = CommerceClient::with_options(key, config.client_options())?;
    tracing::info!(
        sandbox = client.public_key().is_sandbox(),
        debug = client.is_debug(),
        "commerce enabled"
    );
    Ok(Some(client))
}

/// The storefront's commerce handle, possibly absent.
///
/// Every component gets a clone of the same value; consumers must check
/// [`Commerce::client`] before making platform calls.
#[derive(Debug, Clone, Default)]
pub struct Commerce(Option<CommerceClient>);

impl Commerce {
    /// Commerce features are unavailable.
    pub fn disabled() -> Self {
        Self(None)
    }

    /// Wrap a built client.
    pub fn enabled(client: CommerceClient) -> Self {
        Self(Some(client))
    }

    /// The client, if commerce is enabled.
    pub fn client(&self) -> Option<&CommerceClient> {
        self.0.as_ref()
    }

    /// Whether commerce is enabled.
    pub fn is_enabled(&self) -> bool {
        self.0.is_some()
    }

    /// Whether both values refer to the same client, or are both disabled.
    pub fn same_as(&self, other: &Commerce) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl From<Option<CommerceClient>> for Commerce {
    fn from(client: Option<CommerceClient>) -> Self {
        Self(client)
    }
}

/// The commerce handle installed by the storefront root.
///
/// Outside a storefront root this logs a warning and returns the disabled
/// value.
pub fn use_commerce() -> Commerce {
    use_context::<Commerce>().unwrap_or_else(|| {
        tracing::warn!("commerce requested outside the storefront root");
        Commerce::disabled()
    })
}
