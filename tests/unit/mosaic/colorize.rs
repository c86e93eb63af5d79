//! Tests for multiplicative tile tinting

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use selfmosaic::mosaic::colorize::{colorize_tile, tint_pixel};

    fn gradient_tile() -> RgbaImage {
        RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([
                (x * 16) as u8,
                (y * 16) as u8,
                ((x + y) * 8) as u8,
                ((x * 16) ^ (y * 3)) as u8,
            ])
        })
    }

    // Tests white target leaves opaque RGB untouched
    // Verified by dividing by 256 instead of 255
    #[test]
    fn test_white_target_is_identity() {
        let tile = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, (x * y) as u8, 255])
        });

        assert_eq!(colorize_tile(&tile, [255, 255, 255]), tile);
    }

    // Tests black target zeroes every color channel
    // Verified by adding instead of multiplying
    #[test]
    fn test_black_target_zeroes_rgb() {
        let tile = gradient_tile();
        let tinted = colorize_tile(&tile, [0, 0, 0]);

        for (out, base) in tinted.pixels().zip(tile.pixels()) {
            assert_eq!(*out, Rgba([0, 0, 0, base[3]]));
        }
    }

    // Tests alpha passes through tinting
    // Verified by tinting the alpha channel
    #[test]
    fn test_alpha_copied_byte_for_byte() {
        let tile = gradient_tile();
        let tinted = colorize_tile(&tile, [12, 200, 99]);

        assert_eq!(tinted.dimensions(), tile.dimensions());
        for (out, base) in tinted.pixels().zip(tile.pixels()) {
            assert_eq!(out[3], base[3]);
        }
    }

    // Tests per-channel tint with a pure red target
    // Verified by tinting every channel by red
    #[test]
    fn test_red_target_keeps_only_red() {
        let pixel = tint_pixel(Rgba([200, 150, 100, 42]), [255, 0, 0]);
        assert_eq!(pixel, Rgba([200, 0, 0, 42]));
    }

    // Tests midtone products round to nearest
    // Verified by truncating instead of rounding
    #[test]
    fn test_midtones_round_to_nearest() {
        assert_eq!(tint_pixel(Rgba([128, 128, 128, 255]), [128, 128, 128]), Rgba([64, 64, 64, 255]));
        // 255 * 191/255 = 191 exactly; 100 * 191/255 = 74.9
        assert_eq!(tint_pixel(Rgba([255, 100, 0, 255]), [191, 191, 191]), Rgba([191, 75, 0, 255]));
    }

    // Tests tinting works on a copy
    // Verified by tinting the base in place
    #[test]
    fn test_base_left_unmodified() {
        let tile = gradient_tile();
        let snapshot = tile.clone();
        let _tinted = colorize_tile(&tile, [10, 20, 30]);

        assert_eq!(tile, snapshot);
    }
}
