//! Plain per-pixel quantization.

use crate::palette::Palette;
use crate::raster::Raster;

/// Map every pixel to its nearest palette color, nothing else.
///
/// The baseline every dithering method is measured against: no bias and no
/// error compensation. Flat regions collapse to a single palette color,
/// which is exactly the banding the other methods exist to break up.
pub fn threshold(image: &Raster, palette: &Palette) -> Raster {
    Raster::from_fn(image.cols(), image.rows(), |x, y| {
        palette.nearest(image.get(x, y))
    })
}
