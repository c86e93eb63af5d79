//! Canvas assembly from a color grid and a tinted tile template
//!
//! [`MosaicCompositor`] places one cell per call so callers can report progress
//! between placements. [`generate_mosaic`] wraps the whole file-to-file pipeline.

use crate::io::configuration::{
    DEFAULT_TILE_SIZE, DEFAULT_TILES, LAYOUT_RESOLUTION, MAX_IMAGE_PIXELS,
};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::image::{load_image, save_png};
use crate::io::progress::ProgressReporter;
use crate::mosaic::colorize::colorize_tile;
use crate::mosaic::flatten::{WHITE, flatten};
use crate::mosaic::grid::ColorGrid;
use image::{Rgba, RgbaImage, imageops};
use std::path::Path;
use tracing::debug;

/// Grid, tile and layout parameters for one mosaic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Number of cells per row
    pub tiles_x: u32,
    /// Number of rows
    pub tiles_y: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Width the layout is loaded at before sampling
    pub layout_width: u32,
    /// Height the layout is loaded at before sampling
    pub layout_height: u32,
    /// Color transparent layout regions are flattened onto
    pub background: Rgba<u8>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self::square(DEFAULT_TILES, DEFAULT_TILE_SIZE)
    }
}

impl MosaicConfig {
    /// Square grid of square tiles with the default layout resolution and white background
    pub const fn square(tiles: u32, tile_size: u32) -> Self {
        Self {
            tiles_x: tiles,
            tiles_y: tiles,
            tile_width: tile_size,
            tile_height: tile_size,
            layout_width: LAYOUT_RESOLUTION,
            layout_height: LAYOUT_RESOLUTION,
            background: WHITE,
        }
    }

    /// Output canvas dimensions, or `None` if they overflow
    pub const fn canvas_dimensions(&self) -> Option<(u32, u32)> {
        match (
            self.tiles_x.checked_mul(self.tile_width),
            self.tiles_y.checked_mul(self.tile_height),
        ) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }

    /// Total number of grid cells
    pub const fn cell_count(&self) -> u64 {
        self.tiles_x as u64 * self.tiles_y as u64
    }

    /// Reject empty dimensions and images beyond the pixel limit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any tile count, tile size or layout dimension is zero
    /// - The canvas or the layout would exceed the maximum pixel count
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("tiles_x", self.tiles_x),
            ("tiles_y", self.tiles_y),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("layout_width", self.layout_width),
            ("layout_height", self.layout_height),
        ];
        for (parameter, value) in positive {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        let too_large = || {
            invalid_parameter(
                "canvas",
                &format!(
                    "{}x{} tiles of {}x{}",
                    self.tiles_x, self.tiles_y, self.tile_width, self.tile_height
                ),
                &format!("canvas would exceed {MAX_IMAGE_PIXELS} pixels"),
            )
        };
        let (width, height) = self.canvas_dimensions().ok_or_else(too_large)?;
        if pixel_count(width, height) > MAX_IMAGE_PIXELS {
            return Err(too_large());
        }

        if pixel_count(self.layout_width, self.layout_height) > MAX_IMAGE_PIXELS {
            return Err(invalid_parameter(
                "layout",
                &format!("{}x{}", self.layout_width, self.layout_height),
                &format!("layout would exceed {MAX_IMAGE_PIXELS} pixels"),
            ));
        }

        Ok(())
    }
}

const fn pixel_count(width: u32, height: u32) -> u64 {
    width as u64 * height as u64
}

/// Places tinted tiles onto the canvas one grid cell at a time
#[derive(Debug)]
pub struct MosaicCompositor {
    grid: ColorGrid,
    tile: RgbaImage,
    canvas: RgbaImage,
    next_cell: usize,
}

impl MosaicCompositor {
    /// Flatten and sample `layout`, then prepare an empty canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - `tile` does not match the configured tile size
    /// - `layout` is empty
    pub fn new(layout: &RgbaImage, tile: RgbaImage, config: &MosaicConfig) -> Result<Self> {
        config.validate()?;

        if tile.dimensions() != (config.tile_width, config.tile_height) {
            return Err(invalid_parameter(
                "tile",
                &format!("{}x{}", tile.width(), tile.height()),
                &format!(
                    "tile template must be {}x{}",
                    config.tile_width, config.tile_height
                ),
            ));
        }

        let flattened = flatten(layout, config.background);
        let grid = ColorGrid::from_layout(&flattened, config.tiles_x, config.tiles_y)?;

        let (width, height) = config
            .canvas_dimensions()
            .ok_or_else(|| computation_error("canvas size", &"dimensions overflow"))?;

        Ok(Self {
            grid,
            tile,
            canvas: RgbaImage::new(width, height),
            next_cell: 0,
        })
    }

    /// Sampled cell colors
    pub const fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    /// Number of cells placed so far
    pub const fn placed(&self) -> usize {
        self.next_cell
    }

    /// Check whether every cell has been placed
    pub fn is_complete(&self) -> bool {
        self.next_cell >= self.grid.len()
    }

    /// Tint the tile for the next cell and paste it over the canvas
    ///
    /// Returns `false` without changing the canvas once every cell is placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the next cell lies outside the grid
    pub fn place_next(&mut self) -> Result<bool> {
        if self.is_complete() {
            return Ok(false);
        }

        let (x, y, color) = self.grid.cell(self.next_cell).ok_or_else(|| {
            computation_error("cell lookup", &format!("no cell {}", self.next_cell))
        })?;

        let tinted = colorize_tile(&self.tile, color);
        imageops::replace(
            &mut self.canvas,
            &tinted,
            i64::from(x * self.tile.width()),
            i64::from(y * self.tile.height()),
        );

        self.next_cell += 1;
        Ok(true)
    }

    /// Finished (or partially placed) canvas
    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }
}

/// Build a complete mosaic from in-memory images
///
/// # Errors
///
/// Returns an error if the compositor rejects the inputs
pub fn compose_mosaic(
    layout: &RgbaImage,
    tile: RgbaImage,
    config: &MosaicConfig,
) -> Result<RgbaImage> {
    let mut compositor = MosaicCompositor::new(layout, tile, config)?;
    while compositor.place_next()? {}
    Ok(compositor.into_canvas())
}

/// Load the layout and tile images, compose the mosaic, and save it as PNG
///
/// `tile_path` may be the same file as `layout_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation
/// - Either image cannot be loaded
/// - The mosaic cannot be saved to `output_path`
pub fn generate_mosaic(
    layout_path: &Path,
    tile_path: &Path,
    output_path: &Path,
    config: &MosaicConfig,
    progress: &ProgressReporter,
) -> Result<()> {
    config.validate()?;

    progress.set_stage("Loading");
    let layout = load_image(
        layout_path,
        Some((config.layout_width, config.layout_height)),
    )?;
    let tile = load_image(tile_path, Some((config.tile_width, config.tile_height)))?;

    progress.set_stage("Sampling");
    let mut compositor = MosaicCompositor::new(&layout, tile, config)?;
    debug!(
        tiles_x = config.tiles_x,
        tiles_y = config.tiles_y,
        "sampled layout colors"
    );

    progress.start_cells(config.cell_count());
    while compositor.place_next()? {
        progress.advance();
    }
    debug!(placed = progress.position(), "placed tiles");

    progress.set_stage("Saving");
    save_png(&compositor.into_canvas(), output_path)
}
