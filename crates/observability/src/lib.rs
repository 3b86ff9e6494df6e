//! Tracing and logging (shared setup).

pub use crate::tracing::{LogFormat, TracingConfig, try_init};

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &TracingConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, formats).
pub mod tracing;
