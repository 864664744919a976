//! Startup diagnostics.

use crate::config::StorefrontConfig;

/// Framework diagnostics chosen at bootstrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Log a hint when running an unoptimized build.
    pub production_tip: bool,
}

impl Diagnostics {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            production_tip: config.production_tip,
        }
    }

    /// Whether the development-mode hint should be logged for this build.
    pub fn shows_tip(&self) -> bool {
        self.production_tip && cfg!(debug_assertions)
    }

    /// Apply the diagnostics. Called once per bootstrap.
    pub fn install(&self) {
        #[cfg(all(target_arch = "wasm32", feature = "csr"))]
        console_error_panic_hook::set_once();

        if self.shows_tip() {
            tracing::info!(
                "storefront is running a development build; build with --release for production"
            );
        }
    }
}
