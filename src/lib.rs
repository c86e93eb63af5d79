//! Self-similar mosaic generation
//!
//! A layout image is reduced to a grid of representative colors, and every grid cell
//! is filled with a copy of a tile image tinted by that cell's color. Using the layout
//! as its own tile reconstructs the source out of miniature copies of itself.

#![forbid(unsafe_code)]

/// Input/output operations, command-line handling and error types
pub mod io;
/// Flattening, tinting, color grids and canvas composition
pub mod mosaic;

pub use io::error::{MosaicError, Result};
