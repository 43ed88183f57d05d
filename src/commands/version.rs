//! Version reporting.

/// The crate version as declared in the package metadata, unmodified.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
