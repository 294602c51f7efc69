//! Image file decode/encode at the engine boundary.
//!
//! Decoding normalizes 8-bit RGB to float channels; encoding scales back
//! with standard rounding. Format detection is the `image` crate's: by
//! content on load, by extension on save.

use std::path::Path;

use image::RgbImage;
use retro_dither::{Raster, Rgb};

use crate::error::AppError;

/// Decode an image file into a raster with channels normalized to [0, 1].
pub fn load_raster(path: impl AsRef<Path>) -> Result<Raster, AppError> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let data = rgb
        .pixels()
        .map(|p| Rgb::from_u8(p[0], p[1], p[2]))
        .collect();
    Ok(Raster::from_vec(width as usize, height as usize, data)?)
}

/// Convert a raster to an 8-bit RGB image, rounding and clamping channels.
pub fn raster_to_image(raster: &Raster) -> RgbImage {
    let mut out = RgbImage::new(raster.cols() as u32, raster.rows() as u32);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = image::Rgb(raster.get(x as usize, y as usize).to_bytes());
    }
    out
}

/// Encode a raster to an image file; the format follows the extension.
pub fn save_raster(raster: &Raster, path: impl AsRef<Path>) -> Result<(), AppError> {
    raster_to_image(raster).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use retro_dither::Raster;

    #[test]
    fn test_raster_to_image_rounds_and_clamps() {
        let raster = Raster::from_vec(
            2,
            1,
            vec![Rgb::gray(0.5), Rgb::new(1.3, -0.2, 1.0)],
        )
        .unwrap();
        let img = raster_to_image(&raster);

        assert_eq!(img.get_pixel(0, 0).0, [128, 128, 128]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 255]);
    }

    #[test]
    fn test_file_round_trip_preserves_bytes() {
        // Every 8-bit value survives /255 then *255-with-rounding exactly.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        let raster = Raster::from_fn(16, 4, |x, y| {
            Rgb::from_u8((x * 16) as u8, (y * 60) as u8, (x + y) as u8)
        });
        save_raster(&raster, &path).unwrap();

        let reloaded = load_raster(&path).unwrap();
        assert_eq!(reloaded, raster);
    }

    #[test]
    fn test_load_raster_missing_file() {
        let result = load_raster("/nonexistent/missing.png");
        assert!(matches!(result, Err(AppError::Image(_))));
    }
}
