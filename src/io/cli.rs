//! Command-line interface for turning one image into a mosaic of itself

use crate::io::configuration::{
    DEFAULT_BACKGROUND_HEX, DEFAULT_TILE_SIZE, DEFAULT_TILES, LAYOUT_RESOLUTION,
};
use crate::io::error::Result;
use crate::io::image::png_output_path;
use crate::io::progress::ProgressReporter;
use crate::mosaic::compositor::{MosaicConfig, generate_mosaic};
use clap::{ArgAction, Parser};
use image::Rgba;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "selfmosaic")]
#[command(
    author,
    version,
    about = "Create a mosaic made of the image itself"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Path to the input image (SVG, PNG, JPEG, ...)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to save the output mosaic; the extension is always replaced with .png
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of tiles across and down
    #[arg(long, default_value_t = DEFAULT_TILES, value_parser = clap::value_parser!(u32).range(1..))]
    pub tiles: u32,

    /// Size of each tile in pixels
    #[arg(
        long = "tile_size",
        alias = "tile-size",
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tile_size: u32,

    /// Image used as the tile template (defaults to the input image)
    #[arg(long, value_name = "PATH")]
    pub tile: Option<PathBuf>,

    /// Resolution the input is sampled at before averaging, per axis
    #[arg(long, default_value_t = LAYOUT_RESOLUTION, value_parser = clap::value_parser!(u32).range(1..))]
    pub layout_size: u32,

    /// Background behind transparent regions of the input, as RRGGBB
    #[arg(long, default_value = DEFAULT_BACKGROUND_HEX, value_parser = parse_hex_color)]
    pub background: [u8; 3],

    /// Suppress status and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Image used as the tile template
    pub fn tile_path(&self) -> &Path {
        self.tile.as_deref().unwrap_or(&self.input)
    }

    /// Output path with its extension forced to PNG
    pub fn output_path(&self) -> PathBuf {
        png_output_path(&self.output)
    }

    /// Square-grid configuration built from the arguments
    pub fn mosaic_config(&self) -> MosaicConfig {
        let [r, g, b] = self.background;
        MosaicConfig {
            layout_width: self.layout_size,
            layout_height: self.layout_size,
            background: Rgba([r, g, b, 255]),
            ..MosaicConfig::square(self.tiles, self.tile_size)
        }
    }
}

/// Parse a `RRGGBB` hex color with an optional leading `#`
///
/// # Errors
///
/// Returns a message if the value is not exactly six hex digits
pub fn parse_hex_color(value: &str) -> std::result::Result<[u8; 3], String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected six hex digits (RRGGBB), got '{value}'"));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| format!("invalid hex color '{value}'"))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Drives a single mosaic generation from parsed arguments
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the mosaic, printing status lines unless quiet
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::generate`]
    pub fn run(&self) -> Result<()> {
        self.generate().map(|_| ())
    }

    /// Generate the mosaic and return the path it was written to
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be loaded, the parameters are invalid,
    /// or the output cannot be written
    pub fn generate(&self) -> Result<PathBuf> {
        let output_path = self.cli.output_path();
        let config = self.cli.mosaic_config();

        self.announce(&format!(
            "Loading layout image: {}",
            self.cli.input.display()
        ));

        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        let result = generate_mosaic(
            &self.cli.input,
            self.cli.tile_path(),
            &output_path,
            &config,
            &progress,
        );
        progress.finish();
        result?;

        self.announce(&format!("Mosaic saved to: {}", output_path.display()));
        Ok(output_path)
    }

    // Allow print for the two user-facing status lines
    #[allow(clippy::print_stdout)]
    fn announce(&self, line: &str) {
        if self.cli.should_show_progress() {
            println!("{line}");
        }
    }
}
