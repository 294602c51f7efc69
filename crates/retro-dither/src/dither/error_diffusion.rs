//! The error diffusion scan.
//!
//! Error diffusion works by:
//! 1. Visit each pixel in raster order (top row first, left to right)
//! 2. Replace it with the nearest palette color
//! 3. Compute the quantization error (desired minus chosen)
//! 4. Hand weighted shares of that error to unvisited neighbors
//!
//! Accumulated error nudges later pixels across palette boundaries, which
//! is what preserves the average tone of a region through quantization.

use crate::dither::kernel::DiffusionKernel;
use crate::palette::Palette;
use crate::raster::Raster;

/// Quantize `image` to `palette` with error diffusion under `kernel`.
///
/// The input is never modified; the scan runs on a working copy that ends
/// up holding the output. Working values may leave `[0, 1]` while error
/// accumulates and are only resolved by the palette match, never clamped.
/// Error shares aimed outside the image are dropped, so edge pixels
/// propagate less than interior ones.
///
/// The scan order is part of the contract: the same image, palette, and
/// kernel always produce the same output.
///
/// # Example
///
/// ```
/// use retro_dither::dither::{diffuse, kernel::FLOYD_STEINBERG};
/// use retro_dither::{Palette, Raster, Rgb};
///
/// let image = Raster::filled(8, 8, Rgb::gray(0.6));
/// let out = diffuse(&image, &Palette::bilevel(), &FLOYD_STEINBERG);
///
/// assert!(out.pixels().iter().all(|&p| p == Rgb::BLACK || p == Rgb::WHITE));
/// ```
pub fn diffuse(image: &Raster, palette: &Palette, kernel: &DiffusionKernel) -> Raster {
    let mut work = image.clone();
    let cols = work.cols();
    let rows = work.rows();
    let divisor = kernel.divisor as f32;

    for y in 0..rows {
        for x in 0..cols {
            let old = work.get(x, y);
            let new = palette.nearest(old);
            work.set(x, y, new);
            let error = old - new;

            // Current row: forward[i] lands i + 1 columns to the right.
            for (i, &weight) in kernel.forward.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                let nx = x + i + 1;
                if nx < cols {
                    work.add(nx, y, error * (weight as f32 / divisor));
                }
            }

            // Rows below, each centered on the current column.
            for (d, row) in kernel.below.iter().enumerate() {
                let ny = y + d + 1;
                if ny >= rows {
                    break;
                }
                let offset = (row.len() / 2) as isize;
                for (j, &weight) in row.iter().enumerate() {
                    if weight == 0 {
                        continue;
                    }
                    let nx = x as isize + j as isize - offset;
                    if nx >= 0 && (nx as usize) < cols {
                        work.add(nx as usize, ny, error * (weight as f32 / divisor));
                    }
                }
            }
        }
    }

    work
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::dither::kernel::{
        ATKINSON, BURKES, FAN, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, SIERRA, SIERRA_LITE, STUCKI,
        TWO_ROW_SIERRA,
    };

    #[test]
    fn test_quantization_error_flips_the_next_pixel() {
        // Two pixels of 0.6 gray against black/white. The first rounds up
        // to white; its error (-0.4 scaled by 7/16) drags the second down
        // to 0.425, which rounds to black. Plain per-pixel matching would
        // give white twice.
        let image = Raster::filled(2, 1, Rgb::gray(0.6));
        let out = diffuse(&image, &Palette::bilevel(), &FLOYD_STEINBERG);

        assert_eq!(out.get(0, 0), Rgb::WHITE);
        assert_eq!(out.get(1, 0), Rgb::BLACK);
    }

    #[test]
    fn test_fan_below_row_reaches_left() {
        // Fan pushes its below-row error to columns x-2, x-1, x. The pixel
        // at (2, 0) is the only error source in row 0, so row 1 shows where
        // that error landed: (0, 1) must receive a share (1/16) large
        // enough to pull 0.505 under the midpoint, while (2, 1) receives
        // 5/16 yet ends up white after the row's own forward diffusion.
        let image = Raster::from_vec(
            3,
            2,
            vec![
                Rgb::BLACK,
                Rgb::BLACK,
                Rgb::gray(0.8),
                Rgb::gray(0.505),
                Rgb::BLACK,
                Rgb::gray(0.53),
            ],
        )
        .unwrap();
        let out = diffuse(&image, &Palette::bilevel(), &FAN);

        assert_eq!(out.get(2, 0), Rgb::WHITE);
        assert_eq!(
            out.get(0, 1),
            Rgb::BLACK,
            "Leftward share must push 0.505 below the midpoint"
        );
        assert_eq!(out.get(1, 1), Rgb::BLACK);
        assert_eq!(out.get(2, 1), Rgb::WHITE);
    }

    #[test]
    fn test_single_pixel_is_plain_nearest_match() {
        // A 1x1 image has no neighbors at all; every kernel must degrade
        // to a plain palette match with all error dropped at the borders.
        let kernels = [
            FLOYD_STEINBERG,
            JARVIS_JUDICE_NINKE,
            FAN,
            STUCKI,
            BURKES,
            SIERRA,
            TWO_ROW_SIERRA,
            SIERRA_LITE,
            ATKINSON,
        ];
        let image = Raster::filled(1, 1, Rgb::gray(0.7));
        let palette = Palette::bilevel();

        for kernel in kernels {
            let out = diffuse(&image, &palette, &kernel);
            assert_eq!(out.get(0, 0), Rgb::WHITE);
        }
    }

    #[test]
    fn test_output_holds_only_palette_colors() {
        let palette = Palette::new(vec![Rgb::BLACK, Rgb::gray(0.5), Rgb::WHITE]).unwrap();
        let image = Raster::from_fn(16, 8, |x, y| Rgb::gray((x + y) as f32 / 22.0));

        for kernel in [FLOYD_STEINBERG, ATKINSON] {
            let out = diffuse(&image, &palette, &kernel);
            for &pixel in out.pixels() {
                assert!(
                    palette.colors().contains(&pixel),
                    "Pixel {pixel:?} is not a palette entry"
                );
            }
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let image = Raster::from_fn(5, 5, |x, y| Rgb::gray((x * y) as f32 / 16.0));
        let before = image.clone();

        let _ = diffuse(&image, &Palette::bilevel(), &JARVIS_JUDICE_NINKE);

        assert_eq!(image, before);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let image = Raster::from_fn(12, 12, |x, y| Rgb::gray(x as f32 * 0.07 + y as f32 * 0.03));
        let palette = Palette::bilevel();

        let a = diffuse(&image, &palette, &STUCKI);
        let b = diffuse(&image, &palette, &STUCKI);

        assert_eq!(a, b);
    }
}
