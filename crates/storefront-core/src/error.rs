//! Error types for the storefront bootstrap.

use storefront_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur while bootstrapping the storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The commerce client could not be built.
    #[error("Commerce client error: {0}")]
    Commerce(#[from] CommerceError),

    /// Component names must be non-empty kebab-case.
    #[error("Invalid component name: {0:?}")]
    InvalidComponentName(String),

    /// A component with this name is already registered.
    #[error("Component already registered: {0}")]
    DuplicateComponent(String),

    /// No component is registered under this name.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The mount anchor does not exist in the host document.
    #[error("Mount target not found: #{0}")]
    MountTargetMissing(String),

    /// The host already has a root mounted on this anchor.
    #[error("Storefront already mounted on #{0}")]
    AlreadyMounted(String),

    /// The global log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
