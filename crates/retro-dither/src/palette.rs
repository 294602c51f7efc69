//! Palette storage and nearest-color matching.

use std::str::FromStr;

use crate::color::Rgb;
use crate::error::DitherError;

/// A fixed set of output colors.
///
/// Every dithering method reduces each pixel to one of the palette's
/// entries; the methods differ only in how they bias or compensate the
/// pixel before the reduction. Matching uses squared Euclidean distance
/// in RGB space, which preserves the ordering of true Euclidean distance
/// without the square root.
///
/// Palettes may be any size from one color up; entries may repeat
/// (a duplicate simply never wins a tie against its first occurrence).
///
/// # Example
///
/// ```
/// use retro_dither::{Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::gray(0.9)), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidPalette`] if `colors` is empty. An
    /// empty palette has no nearest color, so it is rejected here rather
    /// than detected mid-scan.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, DitherError> {
        if colors.is_empty() {
            return Err(DitherError::InvalidPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex color strings.
    ///
    /// Accepts `#RRGGBB` and `#RGB` shorthand, with or without the
    /// leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidColor`] if any string fails to
    /// parse, or [`DitherError::InvalidPalette`] if the list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use retro_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#55F", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, DitherError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(parsed)
    }

    /// The classic two-entry black and white palette.
    pub fn bilevel() -> Self {
        Self {
            colors: vec![Rgb::BLACK, Rgb::WHITE],
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // Always false - validated at construction
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All palette colors in declaration order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the index of the palette entry nearest to `color`.
    ///
    /// Ties go to the entry with the lowest index: the scan only replaces
    /// the current best on a strictly smaller distance. Declaration order
    /// therefore matters for inputs equidistant from two entries.
    #[inline]
    pub fn nearest_index(&self, color: Rgb) -> usize {
        // Linear scan - optimal for small palettes (2-16 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// # Example
    ///
    /// ```
    /// use retro_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::new(vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
    /// assert_eq!(palette.nearest(Rgb::gray(0.2)), Rgb::BLACK);
    /// ```
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.colors[self.nearest_index(color)]
    }
}
