//! Mosaic construction from a layout image and a tile template
//!
//! The stages run in order:
//! - Flatten the layout onto an opaque background
//! - Downsample it into a grid of cell colors
//! - Tint the tile template once per cell and paste it onto the canvas

/// Per-pixel multiplicative tinting of tile templates
pub mod colorize;
/// Canvas assembly and the end-to-end file pipeline
pub mod compositor;
/// Alpha removal against an opaque background
pub mod flatten;
/// Grid of representative cell colors
pub mod grid;

pub use compositor::{MosaicCompositor, MosaicConfig};
pub use grid::ColorGrid;
