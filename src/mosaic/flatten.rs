//! Alpha removal by compositing onto an opaque background

use image::{Rgba, RgbaImage};

/// Opaque white, the default flatten background
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Composite `image` over a solid `background`, using source alpha as the blend mask
///
/// Opaque pixels pass through unchanged and fully transparent pixels become exactly
/// the background. The result carries the background's alpha everywhere.
pub fn flatten(image: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let mut flattened = RgbaImage::from_pixel(image.width(), image.height(), background);
    for (dst, src) in flattened.pixels_mut().zip(image.pixels()) {
        *dst = blend_over(*src, background);
    }
    flattened
}

/// Blend a single pixel over `background` weighted by the pixel's own alpha
pub fn blend_over(pixel: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, alpha]) = pixel;
    let Rgba([bg_r, bg_g, bg_b, bg_alpha]) = background;
    Rgba([
        mix(r, bg_r, alpha),
        mix(g, bg_g, alpha),
        mix(b, bg_b, alpha),
        bg_alpha,
    ])
}

// Rounded integer lerp; exact at both ends of the alpha range
fn mix(src: u8, bg: u8, alpha: u8) -> u8 {
    let weight = u32::from(alpha);
    let blended = u32::from(src) * weight + u32::from(bg) * (255 - weight);
    ((blended + 127) / 255) as u8
}
