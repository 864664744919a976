//! Log subscriber setup.
//!
//! Everything in the storefront logs through `tracing`. This module installs
//! the global subscriber once at startup: to stderr natively, to the browser
//! console on wasm32.

use serde::{Deserialize, Serialize};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::{Result, StorefrontError};

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines (for log aggregation).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"storefront_core=debug,info"`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Human,
        }
    }
}

impl LoggingConfig {
    /// Build the filter. Natively `RUST_LOG` takes precedence over the
    /// configured level.
    pub fn filter(&self) -> Result<EnvFilter> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        EnvFilter::try_new(&self.level)
            .map_err(|e| StorefrontError::Logging(format!("Invalid level {:?}: {}", self.level, e)))
    }
}

/// Install the global log subscriber.
///
/// Fails with [`StorefrontError::Logging`] if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = config.filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    #[cfg(target_arch = "wasm32")]
    let builder = builder
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleWriter::default);

    let result = match config.format {
        LogFormat::Json => builder.json().finish().try_init(),
        LogFormat::Human => builder.finish().try_init(),
    };

    result.map_err(|e| StorefrontError::Logging(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to the browser console.
    #[derive(Default)]
    pub(super) struct ConsoleWriter(Vec<u8>);

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.0);
            let line = line.trim_end();
            if !line.is_empty() {
                leptos::logging::console_log(line);
            }
        }
    }
}
