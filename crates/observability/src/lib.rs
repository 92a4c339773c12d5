//! Tracing and logging setup shared by every storefront host.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with the default filter (`info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
