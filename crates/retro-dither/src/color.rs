//! RGB color type for dithering arithmetic.
//!
//! All engine math happens on normalized float channels. Error diffusion
//! needs signed, out-of-range intermediate values, so nothing here clamps
//! implicitly; callers clamp where their algorithm demands it.

use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::DitherError;

/// A color with three float channels, nominally in `0.0..=1.0`.
///
/// Values outside the nominal range are legal and expected: quantization
/// error pushed into a neighbor can drive a channel negative or above 1.0
/// until that pixel is itself quantized. Only [`clamp_unit()`](Self::clamp_unit)
/// and the byte conversion force values back into range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (nominally 0.0..=1.0)
    pub r: f32,
    /// Green channel (nominally 0.0..=1.0)
    pub g: f32,
    /// Blue channel (nominally 0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color from float channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color with all three channels set to `value`.
    ///
    /// # Example
    /// ```
    /// use retro_dither::Rgb;
    /// assert_eq!(Rgb::gray(0.5), Rgb::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn gray(value: f32) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use retro_dither::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to a byte array `[R, G, B]`.
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use retro_dither::Rgb;
    /// let color = Rgb::new(1.0, 0.5, -0.25);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes, [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Clamp every channel to `0.0..=1.0`.
    #[inline]
    pub fn clamp_unit(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Squared Euclidean distance between two colors.
    ///
    /// The square root is skipped: squaring is monotonic, so comparing
    /// squared distances selects the same nearest color as comparing
    /// Euclidean distances.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }
}

impl Add for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, rhs: Rgb) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    #[inline]
    fn sub(self, rhs: Rgb) -> Rgb {
        Rgb {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Mul<f32> for Rgb {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: f32) -> Rgb {
        Rgb {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl FromStr for Rgb {
    type Err = DitherError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro_dither::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::WHITE);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || DitherError::InvalidColor(s.trim().to_string());

        match hex.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(invalid()),
        }
    }
}
