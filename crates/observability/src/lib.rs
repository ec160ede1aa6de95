//! Tracing/logging setup shared by the catalog binaries.

/// Tracing configuration (filters, formatting, writer).
pub mod tracing;

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
