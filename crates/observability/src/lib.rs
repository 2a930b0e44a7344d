//! Tracing/logging setup shared by catalog binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing with the format named by `CATALOG_LOG_FORMAT`.
///
/// An unrecognised format falls back to the default and is reported as a
/// warning once the subscriber is installed. This is safe to call multiple
/// times; subsequent calls become no-ops.
pub fn init() {
    let raw = std::env::var(tracing::LOG_FORMAT_ENV).ok();
    match tracing::resolve_format(raw.as_deref()) {
        Ok(format) => tracing::init(format),
        Err(err) => {
            tracing::init(LogFormat::default());
            ::tracing::warn!(
                env = tracing::LOG_FORMAT_ENV,
                error = %err,
                "ignoring invalid log format, using default"
            );
        }
    }
}
