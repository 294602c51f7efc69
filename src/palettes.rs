//! Builtin retro palette tables.
//!
//! Reconstructions of classic fixed-hardware palettes: grayscale ramps at
//! 1 to 7 bits, the CGA mode 4/5 sets at both intensity levels, the 16-color
//! EGA set, and the 216-color websafe cube. Registration order is stable; it
//! drives `list` output and collage column order.

use retro_dither::{DitherError, Palette, Rgb};

/// Palette used by `dither` and `split` when no name or color list is given.
pub const DEFAULT_PALETTE: &str = "cga_mode4_2_high";

/// Named palette table preserving registration order.
#[derive(Debug, Clone)]
pub struct PaletteSet {
    entries: Vec<(String, Palette)>,
}

impl PaletteSet {
    /// Build the full builtin table.
    pub fn builtin() -> Self {
        let low = low_intensity();
        let high = high_intensity();

        let mut entries = Vec::new();

        for bit_depth in 1..=7 {
            entries.push(named(&format!("{bit_depth}bit_gray"), gray_ramp(bit_depth)));
        }

        // black, low cyan, low magenta, low white
        entries.push(named("cga_mode4_1", vec![low[0], low[3], low[5], low[7]]));
        // black, low green, low red, brown
        entries.push(named("cga_mode4_2", vec![low[0], low[2], low[4], low[6]]));
        // black, high cyan, high magenta, white
        entries.push(named(
            "cga_mode4_1_high",
            vec![low[0], high[3], high[5], high[7]],
        ));
        // black, high green, high red, yellow
        entries.push(named(
            "cga_mode4_2_high",
            vec![low[0], high[2], high[4], high[6]],
        ));
        // black, low cyan, low red, low white
        entries.push(named("cga_mode5", vec![low[0], low[3], low[4], low[7]]));
        // black, high cyan, high red, white
        entries.push(named(
            "cga_mode5_high",
            vec![low[0], high[3], high[4], high[7]],
        ));

        let mut ega = low.clone();
        ega.extend_from_slice(&high);
        entries.push(named("ega_default", ega));

        entries.push(named("websafe", websafe()));

        Self { entries }
    }

    /// Look up a palette by name.
    pub fn get(&self, name: &str) -> Result<&Palette, DitherError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
            .ok_or_else(|| DitherError::UnknownPalette(name.to_string()))
    }

    /// All palette names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, palette)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse a comma-separated hex color list (`#RGB`/`#RRGGBB`, `#` optional)
/// into a palette, preserving argument order.
pub fn parse_color_list(list: &str) -> Result<Palette, DitherError> {
    let colors = list
        .split(',')
        .map(|entry| entry.parse::<Rgb>())
        .collect::<Result<Vec<_>, _>>()?;
    Palette::new(colors)
}

fn named(name: &str, colors: Vec<Rgb>) -> (String, Palette) {
    let palette = Palette::new(colors).expect("builtin palettes are never empty");
    (name.to_string(), palette)
}

/// Evenly spaced gray ramp: black plus `2^bit_depth - 1` levels up to white.
fn gray_ramp(bit_depth: u32) -> Vec<Rgb> {
    let levels = (1u32 << bit_depth) - 1;
    let mut colors = vec![Rgb::BLACK];
    for l in 1..=levels {
        colors.push(Rgb::gray(l as f32 / levels as f32));
    }
    colors
}

/// The eight low-intensity RGB combinations in r-major bit order
/// (index = r*4 + g*2 + b), channel amplitude 2/3.
///
/// Entry 6 gets the classic brown fix: CGA hardware halved the green gun
/// on low-intensity yellow, turning it brown.
fn low_intensity() -> Vec<Rgb> {
    let off_on = [0.0, 2.0 / 3.0];
    let mut colors = Vec::with_capacity(8);
    for &r in &off_on {
        for &g in &off_on {
            for &b in &off_on {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors[6].g /= 2.0;
    colors
}

/// The eight high-intensity RGB combinations in the same bit order,
/// channels swinging 1/3 to 1.0. No brown fix here: high yellow stays yellow.
fn high_intensity() -> Vec<Rgb> {
    let off_on = [1.0 / 3.0, 1.0];
    let mut colors = Vec::with_capacity(8);
    for &r in &off_on {
        for &g in &off_on {
            for &b in &off_on {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors
}

/// The common 216-color websafe cube: every channel in {0/5 .. 5/5}.
fn websafe() -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(216);
    for r in 0..6 {
        for g in 0..6 {
            for b in 0..6 {
                colors.push(Rgb::new(
                    r as f32 / 5.0,
                    g as f32 / 5.0,
                    b as f32 / 5.0,
                ));
            }
        }
    }
    colors
}
