//! Tests for command-line parsing, hex colors and the mosaic runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use selfmosaic::io::cli::{Cli, MosaicRunner, parse_hex_color};
    use selfmosaic::io::configuration::{DEFAULT_TILE_SIZE, DEFAULT_TILES, LAYOUT_RESOLUTION};
    use std::path::{Path, PathBuf};

    // Tests CLI parsing with only the two positional paths
    // Verified by changing the default tile count
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "logo.svg", "mosaic.png"]);

        assert_eq!(cli.input, PathBuf::from("logo.svg"));
        assert_eq!(cli.output, PathBuf::from("mosaic.png"));
        assert_eq!(cli.tiles, DEFAULT_TILES);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.layout_size, LAYOUT_RESOLUTION);
        assert_eq!(cli.background, [255, 255, 255]);
        assert!(cli.tile.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    // Tests CLI parsing with every option supplied
    // Verified by dropping the verbose count action
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "in.png",
            "out.png",
            "--tiles",
            "8",
            "--tile_size",
            "12",
            "--tile",
            "tile.png",
            "--layout-size",
            "300",
            "--background",
            "#102030",
            "--quiet",
            "-vv",
        ]);

        assert_eq!(cli.tiles, 8);
        assert_eq!(cli.tile_size, 12);
        assert_eq!(cli.tile, Some(PathBuf::from("tile.png")));
        assert_eq!(cli.layout_size, 300);
        assert_eq!(cli.background, [0x10, 0x20, 0x30]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    // Tests dashed spelling of the tile size flag
    // Verified by removing the tile-size alias
    #[test]
    fn test_tile_size_dash_alias() {
        let cli = Cli::parse_from(["program", "in.png", "out.png", "--tile-size", "7"]);
        assert_eq!(cli.tile_size, 7);
    }

    // Tests rejection of zero tiles, tile sizes and layout sizes
    // Verified by widening the value range to include zero
    #[test]
    fn test_zero_sizes_rejected() {
        assert!(Cli::try_parse_from(["program", "in.png", "out.png", "--tiles", "0"]).is_err());
        assert!(Cli::try_parse_from(["program", "in.png", "out.png", "--tile_size", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["program", "in.png", "out.png", "--layout-size", "0"]).is_err()
        );
    }

    // Tests that the output path is required
    // Verified by making output optional
    #[test]
    fn test_missing_output_rejected() {
        assert!(Cli::try_parse_from(["program", "in.png"]).is_err());
    }

    // Tests output extension rewrite for any user-supplied extension
    // Verified by returning the output path unchanged
    #[test]
    fn test_output_path_forced_to_png() {
        let cli = Cli::parse_from(["program", "in.svg", "renders/out.jpg"]);
        assert_eq!(cli.output_path(), PathBuf::from("renders/out.png"));

        let cli = Cli::parse_from(["program", "in.svg", "out"]);
        assert_eq!(cli.output_path(), PathBuf::from("out.png"));
    }

    // Tests tile template falls back to the layout image
    // Verified by always returning the input path
    #[test]
    fn test_tile_path_defaults_to_input() {
        let cli = Cli::parse_from(["program", "in.svg", "out.png"]);
        assert_eq!(cli.tile_path(), Path::new("in.svg"));

        let cli = Cli::parse_from(["program", "in.svg", "out.png", "--tile", "other.png"]);
        assert_eq!(cli.tile_path(), Path::new("other.png"));
    }

    // Tests quiet flag hides progress
    // Verified by ignoring the quiet flag
    #[test]
    fn test_should_show_progress() {
        let cli = Cli::parse_from(["program", "in.png", "out.png"]);
        assert!(cli.should_show_progress());

        let cli = Cli::parse_from(["program", "in.png", "out.png", "-q"]);
        assert!(!cli.should_show_progress());
    }

    // Tests CLI builds a square grid of square tiles
    // Verified by swapping tiles and tile size in the config
    #[test]
    fn test_mosaic_config_is_square() {
        let cli = Cli::parse_from([
            "program",
            "in.png",
            "out.png",
            "--tiles",
            "4",
            "--tile_size",
            "9",
            "--background",
            "000000",
        ]);
        let config = cli.mosaic_config();

        assert_eq!((config.tiles_x, config.tiles_y), (4, 4));
        assert_eq!((config.tile_width, config.tile_height), (9, 9));
        assert_eq!(
            (config.layout_width, config.layout_height),
            (LAYOUT_RESOLUTION, LAYOUT_RESOLUTION)
        );
        assert_eq!(config.background, Rgba([0, 0, 0, 255]));
    }

    // Tests hex color parsing with and without a leading hash
    // Verified by accepting three-digit colors
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("ffffff"), Ok([255, 255, 255]));
        assert_eq!(parse_hex_color("#FF8000"), Ok([255, 128, 0]));
        assert_eq!(parse_hex_color("0a0B0c"), Ok([10, 11, 12]));

        assert!(parse_hex_color("fff").is_err());
        assert!(parse_hex_color("#fffffff").is_err());
        assert!(parse_hex_color("gggggg").is_err());
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("##ffffff").is_err());
    }

    // Tests runner writes the PNG beside the requested output
    // Verified by saving to the unmodified output path
    #[test]
    fn test_runner_writes_png_next_to_requested_output() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("source.png");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
            .save(&input)
            .expect("Failed to write source image");

        let requested = dir.path().join("result.jpeg");
        let cli = Cli::parse_from([
            "program",
            input.to_str().expect("Non UTF-8 temp path"),
            requested.to_str().expect("Non UTF-8 temp path"),
            "--tiles",
            "3",
            "--tile_size",
            "5",
            "--quiet",
        ]);

        let written = MosaicRunner::new(cli)
            .generate()
            .expect("Mosaic generation failed");

        assert_eq!(written, dir.path().join("result.png"));
        assert!(written.exists());
        assert!(!requested.exists());

        let mosaic = image::open(&written).expect("Failed to reopen mosaic");
        assert_eq!((mosaic.width(), mosaic.height()), (15, 15));
    }

    // Tests runner fails without output when the input is missing
    // Verified by swallowing load errors in run
    #[test]
    fn test_runner_propagates_missing_input() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("missing.png");
        let output = dir.path().join("out.png");
        let cli = Cli::parse_from([
            "program",
            input.to_str().expect("Non UTF-8 temp path"),
            output.to_str().expect("Non UTF-8 temp path"),
            "-q",
        ]);

        assert!(MosaicRunner::new(cli).run().is_err());
        assert!(!output.exists());
    }
}
