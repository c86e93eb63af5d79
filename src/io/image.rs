//! Image loading with SVG rasterization, RGBA normalization and PNG export

use crate::io::configuration::{OUTPUT_EXTENSION, RESAMPLE_FILTER, VECTOR_EXTENSIONS};
use crate::io::error::{MosaicError, Result, computation_error, invalid_parameter};
use image::{ImageFormat, ImageReader, Rgba, Rgba32FImage, RgbaImage, imageops};
use resvg::{tiny_skia, usvg};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Check whether a path names a vector image by its extension
pub fn is_vector_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VECTOR_EXTENSIONS
                .iter()
                .any(|vector| ext.eq_ignore_ascii_case(vector))
        })
}

/// Load an image as RGBA, optionally resized to `size` as `(width, height)`
///
/// Vector images are rasterized directly at the requested size. Raster images are
/// decoded at their native size and then resampled. Without a size the image keeps
/// its native (or, for SVG, intrinsic) dimensions.
///
/// # Errors
///
/// Returns an error if:
/// - `size` has a zero dimension
/// - The file cannot be read
/// - The format is unsupported or the data is malformed
pub fn load_image(path: &Path, size: Option<(u32, u32)>) -> Result<RgbaImage> {
    if let Some((width, height)) = size
        && (width == 0 || height == 0)
    {
        return Err(invalid_parameter(
            "size",
            &format!("{width}x{height}"),
            &"image dimensions must be positive",
        ));
    }

    let image = if is_vector_path(path) {
        rasterize_svg(path, size)?
    } else {
        let decoded = decode_raster(path)?;
        match size {
            Some((width, height)) => resize_rgba(&decoded, width, height),
            None => decoded,
        }
    };

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );
    Ok(image)
}

/// Resample straight RGBA through premultiplied alpha
///
/// Filtering straight color would bleed the RGB of fully transparent pixels into
/// visible edges. Channels are premultiplied into normalized floats, resampled, then
/// divided back out; pixels whose alpha rounds to zero come out as transparent black.
pub fn resize_rgba(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied = Rgba32FImage::new(image.width(), image.height());
    for (dst, src) in premultiplied.pixels_mut().zip(image.pixels()) {
        let Rgba([r, g, b, a]) = *src;
        let alpha = f32::from(a) / 255.0;
        *dst = Rgba([
            f32::from(r) / 255.0 * alpha,
            f32::from(g) / 255.0 * alpha,
            f32::from(b) / 255.0 * alpha,
            alpha,
        ]);
    }

    let resampled = imageops::resize(&premultiplied, width, height, RESAMPLE_FILTER);

    let mut straight = RgbaImage::new(width, height);
    for (dst, src) in straight.pixels_mut().zip(resampled.pixels()) {
        let Rgba([r, g, b, alpha]) = *src;
        let opacity = unit_to_u8(alpha);
        *dst = if opacity == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([
                unit_to_u8(r / alpha),
                unit_to_u8(g / alpha),
                unit_to_u8(b / alpha),
                opacity,
            ])
        };
    }
    straight
}

fn unit_to_u8(value: f32) -> u8 {
    num_traits::clamp(value * 255.0, 0.0, 255.0).round() as u8
}

fn decode_raster(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "open image",
            source: e,
        })?;

    let decoded = reader.decode().map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(decoded.into_rgba8())
}

/// Rasterize an SVG file into straight (non-premultiplied) RGBA
///
/// The document is scaled uniformly to fit inside `size` and centred, leaving the
/// uncovered margin transparent. Without a size it is rendered at its intrinsic
/// dimensions rounded up to whole pixels.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the target pixmap
/// cannot be allocated
pub fn rasterize_svg(path: &Path, size: Option<(u32, u32)>) -> Result<RgbaImage> {
    let data = std::fs::read(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read svg",
        source: e,
    })?;

    let mut options = usvg::Options {
        resources_dir: path.parent().map(Path::to_path_buf),
        ..usvg::Options::default()
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(&data, &options).map_err(|e| MosaicError::SvgParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let intrinsic = tree.size();
    let (width, height) = size.unwrap_or_else(|| {
        (
            intrinsic.width().ceil().max(1.0) as u32,
            intrinsic.height().ceil().max(1.0) as u32,
        )
    });

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        computation_error(
            "rasterize svg",
            &format!("cannot allocate a {width}x{height} pixmap"),
        )
    })?;

    resvg::render(
        &tree,
        fit_transform(intrinsic, width, height),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied color
    let mut image = RgbaImage::new(width, height);
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Ok(image)
}

/// Uniform scale and centring offset placing `intrinsic` inside a `width` by `height` pixmap
fn fit_transform(intrinsic: tiny_skia::Size, width: u32, height: u32) -> tiny_skia::Transform {
    let (target_width, target_height) = (width as f32, height as f32);
    let scale = (target_width / intrinsic.width()).min(target_height / intrinsic.height());
    let offset_x = (target_width - intrinsic.width() * scale) / 2.0;
    let offset_y = (target_height - intrinsic.height() * scale) / 2.0;
    tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, offset_x, offset_y)
}

/// Replace the final extension of `path` with `png`, or append one if absent
pub fn png_output_path(path: &Path) -> PathBuf {
    path.with_extension(OUTPUT_EXTENSION)
}

/// Save an image as PNG regardless of the extension of `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        path = %output_path.display(),
        width = image.width(),
        height = image.height(),
        "saved mosaic"
    );
    Ok(())
}
