//! Channel-split dithering.
//!
//! Splits the source into its R, G, B planes and Floyd-Steinberg-dithers
//! each plane as a grayscale raster against the selected palette. The
//! per-plane results are reduced to luma and recombined into one raster.
//! Saturated palettes produce strong color fringing; that is the point of
//! the experiment.

use retro_dither::dither::diffuse;
use retro_dither::dither::kernel::FLOYD_STEINBERG;
use retro_dither::{Palette, Raster, Rgb};

/// ITU-R 601 luma weights for the dithered-plane-to-channel reduction.
const LUMA: [f32; 3] = [0.299, 0.587, 0.114];

/// Dither each color channel independently and recombine.
pub fn split_bands(source: &Raster, palette: &Palette) -> Raster {
    let r_plane = dither_plane(source, palette, |c| c.r);
    let g_plane = dither_plane(source, palette, |c| c.g);
    let b_plane = dither_plane(source, palette, |c| c.b);

    Raster::from_fn(source.cols(), source.rows(), |x, y| {
        Rgb::new(
            luma(r_plane.get(x, y)),
            luma(g_plane.get(x, y)),
            luma(b_plane.get(x, y)),
        )
    })
}

/// Replicate one channel into a gray raster and error-diffuse it.
fn dither_plane(source: &Raster, palette: &Palette, channel: impl Fn(Rgb) -> f32) -> Raster {
    let gray = Raster::from_fn(source.cols(), source.rows(), |x, y| {
        Rgb::gray(channel(source.get(x, y)))
    });
    diffuse(&gray, palette, &FLOYD_STEINBERG)
}

/// Reduce a dithered plane pixel back to a single channel value.
#[inline]
fn luma(color: Rgb) -> f32 {
    LUMA[0] * color.r + LUMA[1] * color.g + LUMA[2] * color.b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes::PaletteSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_preserves_dimensions_and_black() {
        let palettes = PaletteSet::builtin();
        let palette = palettes.get("1bit_gray").unwrap();
        let source = Raster::filled(5, 4, Rgb::BLACK);

        let result = split_bands(&source, palette);
        assert_eq!(result.cols(), 5);
        assert_eq!(result.rows(), 4);
        // Black planes dither to black, and black's luma is exactly zero.
        assert_eq!(result, source);
    }

    #[test]
    fn test_split_white_saturates_every_channel() {
        let palettes = PaletteSet::builtin();
        let palette = palettes.get("1bit_gray").unwrap();
        let source = Raster::filled(4, 4, Rgb::WHITE);

        let result = split_bands(&source, palette);
        for pixel in result.pixels() {
            // luma(white) is the weight sum, 1.0 up to float addition error.
            assert!((pixel.r - 1.0).abs() < 1e-6);
            assert!((pixel.g - 1.0).abs() < 1e-6);
            assert!((pixel.b - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_split_channels_stay_independent() {
        let palettes = PaletteSet::builtin();
        let palette = palettes.get("1bit_gray").unwrap();
        // Red plane mid-tone, green and blue planes black.
        let source = Raster::filled(24, 24, Rgb::new(0.6, 0.0, 0.0));

        let result = split_bands(&source, palette);

        let mut high_red = 0usize;
        for pixel in result.pixels() {
            assert_eq!(pixel.g, 0.0);
            assert_eq!(pixel.b, 0.0);
            if pixel.r > 0.5 {
                high_red += 1;
            }
        }

        // The dithered red plane should average out near the 0.6 input.
        let ratio = high_red as f32 / result.len() as f32;
        assert!(
            (0.45..=0.75).contains(&ratio),
            "red duty cycle {ratio} should sit near 0.6"
        );
    }
}
