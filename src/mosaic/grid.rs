//! Grid of representative colors sampled from a flattened layout
//!
//! The layout is resampled down to one pixel per cell, so each cell color is a
//! filter-weighted average of the layout region it covers. Storage is row-major
//! (`[row, col]`), matching the order in which cells are later placed.

use crate::io::configuration::RESAMPLE_FILTER;
use crate::io::error::{Result, invalid_parameter};
use image::{Rgba, RgbaImage, imageops};
use ndarray::Array2;

/// Read-only `tiles_x` by `tiles_y` array of RGB cell colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    colors: Array2<[u8; 3]>,
}

impl ColorGrid {
    /// Downsample `layout` to exactly `tiles_x` by `tiles_y` cells, discarding alpha
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension or the layout itself is empty
    pub fn from_layout(layout: &RgbaImage, tiles_x: u32, tiles_y: u32) -> Result<Self> {
        if tiles_x == 0 || tiles_y == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{tiles_x}x{tiles_y}"),
                &"grid dimensions must be positive",
            ));
        }
        if layout.width() == 0 || layout.height() == 0 {
            return Err(invalid_parameter(
                "layout",
                &format!("{}x{}", layout.width(), layout.height()),
                &"layout image is empty",
            ));
        }

        let sampled = imageops::resize(layout, tiles_x, tiles_y, RESAMPLE_FILTER);
        let colors = Array2::from_shape_fn((tiles_y as usize, tiles_x as usize), |(row, col)| {
            let Rgba([r, g, b, _]) = *sampled.get_pixel(col as u32, row as u32);
            [r, g, b]
        });

        Ok(Self { colors })
    }

    /// Wrap precomputed colors laid out as `[row, col]`
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no cells
    pub fn from_colors(colors: Array2<[u8; 3]>) -> Result<Self> {
        let (rows, cols) = colors.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{cols}x{rows}"),
                &"grid dimensions must be positive",
            ));
        }
        Ok(Self { colors })
    }

    /// Number of cells per row
    pub fn tiles_x(&self) -> u32 {
        self.colors.ncols() as u32
    }

    /// Number of rows
    pub fn tiles_y(&self) -> u32 {
        self.colors.nrows() as u32
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the grid has no cells (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the cell at column `x`, row `y`
    pub fn color_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.colors.get([y as usize, x as usize]).copied()
    }

    /// Cell number `index` in placement order, as `(x, y, color)`
    ///
    /// Cells are numbered top row first, left to right.
    pub fn cell(&self, index: usize) -> Option<(u32, u32, [u8; 3])> {
        let cols = self.colors.ncols();
        let (row, col) = (index.checked_div(cols)?, index.checked_rem(cols)?);
        self.colors
            .get([row, col])
            .map(|&color| (col as u32, row as u32, color))
    }
}
