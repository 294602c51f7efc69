//! Pixel matrix storage.

use crate::color::Rgb;
use crate::error::DitherError;

/// A 2-D grid of [`Rgb`] pixels, `cols` wide and `rows` tall.
///
/// Pixels are addressed as `(x, y)` with `x` the column (fast axis) and
/// `y` the row, stored row-major in one flat buffer. The dithering methods
/// read one `Raster` and produce a fresh one, so a decoded source can be
/// reused across any number of method/palette invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    cols: usize,
    rows: usize,
    data: Vec<Rgb>,
}

impl Raster {
    /// Create a raster with every pixel set to `fill`.
    pub fn filled(cols: usize, rows: usize, fill: Rgb) -> Self {
        Self {
            cols,
            rows,
            data: vec![fill; cols * rows],
        }
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel in raster
    /// order (row by row, left to right).
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let mut data = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                data.push(f(x, y));
            }
        }
        Self { cols, rows, data }
    }

    /// Create a raster from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if `data.len()` is not
    /// exactly `cols * rows`.
    ///
    /// # Example
    /// ```
    /// use retro_dither::{Raster, Rgb};
    ///
    /// let pixels = vec![Rgb::BLACK, Rgb::WHITE, Rgb::WHITE, Rgb::BLACK];
    /// let raster = Raster::from_vec(2, 2, pixels).unwrap();
    /// assert_eq!(raster.get(1, 0), Rgb::WHITE);
    ///
    /// assert!(Raster::from_vec(3, 2, vec![Rgb::BLACK; 4]).is_err());
    /// ```
    pub fn from_vec(cols: usize, rows: usize, data: Vec<Rgb>) -> Result<Self, DitherError> {
        let expected = cols * rows;
        if data.len() != expected {
            return Err(DitherError::DimensionMismatch {
                context: "pixel buffer length",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { cols, rows, data })
    }

    /// Width in pixels.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Height in pixels.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Panics on out-of-bounds coordinates, like slice indexing.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[y * self.cols + x]
    }

    /// Replace the pixel at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[y * self.cols + x] = color;
    }

    /// Add `delta` to the pixel at `(x, y)` componentwise.
    ///
    /// The result is deliberately not clamped; accumulated quantization
    /// error may leave the nominal channel range.
    #[inline]
    pub fn add(&mut self, x: usize, y: usize, delta: Rgb) {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[y * self.cols + x] += delta;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }
}
