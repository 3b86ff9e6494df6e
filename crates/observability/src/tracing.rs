//! Tracing/logging initialization.
//!
//! Records go to stderr; stdout belongs to the interactive menu.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per record, with timestamps.
    Json,
    /// Compact human-readable lines.
    #[default]
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is not set (e.g. `"warn"`,
    /// `"ledgerbook_accounts=debug"`).
    pub default_directive: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_directive: "warn".to_string(),
        }
    }
}

impl TracingConfig {
    /// `RUST_LOG` wins; otherwise the configured directive. A directive that
    /// fails to parse falls back to `warn`.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let _ = try_init(config);
}

/// Like [`init`], but reports when a global subscriber was already installed.
pub fn try_init(config: &TracingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = config.filter();

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_warn() {
        let config = TracingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.default_directive, "warn");
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = TracingConfig {
            format: LogFormat::Json,
            default_directive: "debug".to_string(),
        };
        init(&config);
        init(&config);
        assert!(try_init(&config).is_err());
        assert!(try_init(&TracingConfig::default()).is_err());
        ::tracing::info!("still logging after second init");
    }
}
