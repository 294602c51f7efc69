//! Noise-based dithering.
//!
//! Instead of a fixed pattern, these methods jitter pixel values with
//! Gaussian noise before the palette match. The caller supplies the RNG,
//! so results are reproducible from a seed and tests can pin the noise
//! down entirely by passing a zero standard deviation.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::color::Rgb;
use crate::palette::Palette;
use crate::raster::Raster;

/// Standard deviation of the dithering noise, one sixth of the channel
/// range.
pub const NOISE_STDDEV: f32 = 1.0 / 6.0;

/// Target block count per axis for [`block_randomized`].
///
/// Images smaller than this per axis fall back to 1x1 blocks, which makes
/// the block method behave like [`randomized`].
pub const BLOCKS_PER_AXIS: usize = 50;

/// Per-pixel random dithering with the default noise level.
pub fn randomized<R: Rng + ?Sized>(image: &Raster, palette: &Palette, rng: &mut R) -> Raster {
    randomized_with_stddev(image, palette, rng, NOISE_STDDEV)
}

/// Per-pixel random dithering with an explicit noise level.
///
/// Every channel of every pixel receives an independent draw from
/// `N(0, stddev^2)` and is clamped back to `[0, 1]` before the palette
/// match. Pixels are visited in raster order, so a seeded RNG reproduces
/// the same output bit for bit.
pub fn randomized_with_stddev<R: Rng + ?Sized>(
    image: &Raster,
    palette: &Palette,
    rng: &mut R,
    stddev: f32,
) -> Raster {
    Raster::from_fn(image.cols(), image.rows(), |x, y| {
        palette.nearest(perturb(image.get(x, y), rng, stddev))
    })
}

/// Block-averaged random dithering with the default noise level.
pub fn block_randomized<R: Rng + ?Sized>(image: &Raster, palette: &Palette, rng: &mut R) -> Raster {
    block_randomized_with_stddev(image, palette, rng, NOISE_STDDEV)
}

/// Block-averaged random dithering with an explicit noise level.
///
/// The image is carved into blocks of `max(1, cols / 50)` by
/// `max(1, rows / 50)` pixels. Each block collapses to the mean of the
/// pixels it actually covers (edge blocks may be smaller than the nominal
/// size). That mean is perturbed once and the matched color fills the
/// whole block. Blocks are visited in raster order.
pub fn block_randomized_with_stddev<R: Rng + ?Sized>(
    image: &Raster,
    palette: &Palette,
    rng: &mut R,
    stddev: f32,
) -> Raster {
    let cols = image.cols();
    let rows = image.rows();
    let block_w = (cols / BLOCKS_PER_AXIS).max(1);
    let block_h = (rows / BLOCKS_PER_AXIS).max(1);

    let mut out = image.clone();
    for by in (0..rows).step_by(block_h) {
        let y_end = (by + block_h).min(rows);
        for bx in (0..cols).step_by(block_w) {
            let x_end = (bx + block_w).min(cols);

            let mean = block_mean(image, bx, x_end, by, y_end);
            let color = palette.nearest(perturb(mean, rng, stddev));

            for y in by..y_end {
                for x in bx..x_end {
                    out.set(x, y, color);
                }
            }
        }
    }
    out
}

/// Add independent Gaussian noise to each channel and clamp to `[0, 1]`.
///
/// Channels draw in r, g, b order; the order is part of the reproducible
/// RNG stream.
fn perturb<R: Rng + ?Sized>(color: Rgb, rng: &mut R, stddev: f32) -> Rgb {
    let mut jitter = |v: f32| {
        let noise: f32 = rng.sample(StandardNormal);
        (v + noise * stddev).clamp(0.0, 1.0)
    };
    Rgb::new(jitter(color.r), jitter(color.g), jitter(color.b))
}

/// Mean of the pixels in `[x0, x1) x [y0, y1)`.
fn block_mean(image: &Raster, x0: usize, x1: usize, y0: usize, y1: usize) -> Rgb {
    let mut sum = Rgb::default();
    for y in y0..y1 {
        for x in x0..x1 {
            sum += image.get(x, y);
        }
    }
    let count = ((x1 - x0) * (y1 - y0)) as f32;
    sum * (1.0 / count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::threshold::threshold;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_stddev_is_plain_threshold() {
        let image = Raster::from_fn(10, 10, |x, y| Rgb::gray((x + y) as f32 / 18.0));
        let palette = Palette::bilevel();
        let mut rng = StdRng::seed_from_u64(3);

        let noised = randomized_with_stddev(&image, &palette, &mut rng, 0.0);

        assert_eq!(noised, threshold(&image, &palette));
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let image = Raster::filled(24, 24, Rgb::gray(0.5));
        let palette = Palette::bilevel();

        let a = randomized(&image, &palette, &mut StdRng::seed_from_u64(42));
        let b = randomized(&image, &palette, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let image = Raster::filled(64, 64, Rgb::gray(0.5));
        let palette = Palette::bilevel();

        let a = randomized(&image, &palette, &mut StdRng::seed_from_u64(1));
        let b = randomized(&image, &palette, &mut StdRng::seed_from_u64(2));

        assert_ne!(a, b, "4096 coin flips should not repeat across seeds");
    }

    #[test]
    fn test_noise_breaks_flat_regions_both_ways() {
        // Mid-gray sits exactly on the palette boundary, so the noise
        // should push pixels to both sides in roughly equal numbers.
        let image = Raster::filled(64, 64, Rgb::gray(0.5));
        let palette = Palette::bilevel();

        let out = randomized(&image, &palette, &mut StdRng::seed_from_u64(9));
        let white = out.pixels().iter().filter(|&&p| p == Rgb::WHITE).count();
        let ratio = white as f32 / out.len() as f32;

        assert!(
            (0.3..=0.7).contains(&ratio),
            "White ratio {ratio} strayed far from 0.5"
        );
    }

    #[test]
    fn test_output_holds_only_palette_colors() {
        let palette = Palette::new(vec![Rgb::BLACK, Rgb::gray(0.5), Rgb::WHITE]).unwrap();
        let image = Raster::from_fn(20, 20, |x, _| Rgb::gray(x as f32 / 19.0));
        let mut rng = StdRng::seed_from_u64(5);

        let out = randomized(&image, &palette, &mut rng);
        for &pixel in out.pixels() {
            assert!(palette.colors().contains(&pixel));
        }
    }

    #[test]
    fn test_blocks_share_one_color() {
        // 100x100 splits into 2x2 blocks. With zero noise each block is
        // the thresholded block mean, so the halves quantize uniformly.
        let image = Raster::from_fn(100, 100, |x, _| {
            if x < 50 {
                Rgb::gray(0.2)
            } else {
                Rgb::gray(0.8)
            }
        });
        let palette = Palette::bilevel();
        let mut rng = StdRng::seed_from_u64(11);

        let out = block_randomized_with_stddev(&image, &palette, &mut rng, 0.0);
        for y in 0..100 {
            for x in 0..100 {
                let expected = if x < 50 { Rgb::BLACK } else { Rgb::WHITE };
                assert_eq!(out.get(x, y), expected, "Pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_edge_block_mean_ignores_missing_pixels() {
        // 101 columns with 2-wide blocks leaves a final 1-wide block. Its
        // mean must come from that single column alone; averaging over the
        // nominal block area would halve it and flip the result.
        let image = Raster::from_fn(101, 1, |x, _| {
            if x == 100 {
                Rgb::gray(0.9)
            } else {
                Rgb::gray(0.1)
            }
        });
        let palette = Palette::bilevel();
        let mut rng = StdRng::seed_from_u64(13);

        let out = block_randomized_with_stddev(&image, &palette, &mut rng, 0.0);
        assert_eq!(out.get(100, 0), Rgb::WHITE);
        assert_eq!(out.get(99, 0), Rgb::BLACK);
    }

    #[test]
    fn test_small_images_fall_back_to_single_pixel_blocks() {
        // 10 pixels per axis is well under the 50-block target, so every
        // block is 1x1 and zero-noise output equals plain threshold.
        let image = Raster::from_fn(10, 10, |x, y| Rgb::gray((x * y) as f32 / 81.0));
        let palette = Palette::bilevel();
        let mut rng = StdRng::seed_from_u64(17);

        let out = block_randomized_with_stddev(&image, &palette, &mut rng, 0.0);
        assert_eq!(out, threshold(&image, &palette));
    }
}
