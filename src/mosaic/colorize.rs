//! Multiplicative tinting of tile templates
//!
//! Each RGB channel is scaled by the matching channel of the target color, normalized
//! to `0.0..=1.0`. The multiply runs on stored 8-bit values with no gamma handling, so
//! white areas of the tile take on the target color and dark areas stay dark.

use image::{Rgba, RgbaImage};

/// Tint a copy of `base` by `target`, leaving alpha untouched
pub fn colorize_tile(base: &RgbaImage, target: [u8; 3]) -> RgbaImage {
    let mut tinted = base.clone();
    for pixel in tinted.pixels_mut() {
        *pixel = tint_pixel(*pixel, target);
    }
    tinted
}

/// Tint a single pixel by `target`
pub fn tint_pixel(pixel: Rgba<u8>, target: [u8; 3]) -> Rgba<u8> {
    let Rgba([r, g, b, alpha]) = pixel;
    let [target_r, target_g, target_b] = target;
    Rgba([
        tint_channel(r, target_r),
        tint_channel(g, target_g),
        tint_channel(b, target_b),
        alpha,
    ])
}

fn tint_channel(base: u8, target: u8) -> u8 {
    let scaled = f32::from(base) / 255.0 * (f32::from(target) / 255.0) * 255.0;
    num_traits::clamp(scaled, 0.0, 255.0).round() as u8
}
