//! Mosaic defaults and fixed limits

use image::imageops::FilterType;

// Default values for configurable parameters
/// Number of tiles along each axis
pub const DEFAULT_TILES: u32 = 50;

/// Edge length of each tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 60;

/// Working resolution the layout is rasterized at before downsampling
pub const LAYOUT_RESOLUTION: u32 = 600;

/// Background used when flattening transparent layouts, as `RRGGBB`
pub const DEFAULT_BACKGROUND_HEX: &str = "ffffff";

// Safety limit to prevent excessive memory allocation
/// Maximum pixel count of any image buffer (1 GiB of RGBA)
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

/// Filter for every resampling step
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// File extensions rasterized as vector graphics
pub const VECTOR_EXTENSIONS: [&str; 2] = ["svg", "svgz"];

/// Extension forced onto every output path
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
