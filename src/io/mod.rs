//! Image decoding and encoding, command-line handling, and supporting infrastructure

/// Command-line arguments and pipeline orchestration
pub mod cli;
/// Default values and fixed limits
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Raster and vector image loading, PNG export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Terminal progress display
pub mod progress;
