//! Ordered (tiled threshold) dithering.

use crate::dither::map::ThresholdMap;
use crate::palette::Palette;
use crate::raster::Raster;

/// Quantize `image` to `palette` under the tiled threshold `map`.
///
/// Each pixel is brightened in proportion to its own value before the
/// palette match: `biased = pixel + pixel * bias(x, y)`. The bias is
/// multiplicative, so black is a fixed point and dark regions stay dark
/// instead of being lifted by the map. No state crosses pixels; the
/// output is a pure function of coordinates, input, map, and palette.
pub fn ordered(image: &Raster, palette: &Palette, map: &ThresholdMap) -> Raster {
    Raster::from_fn(image.cols(), image.rows(), |x, y| {
        let old = image.get(x, y);
        palette.nearest(old + old * map.bias(x, y))
    })
}
