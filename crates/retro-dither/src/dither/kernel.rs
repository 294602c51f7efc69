//! Error diffusion kernel definitions.
//!
//! Each kernel describes how the quantization error of one pixel is handed
//! on to pixels that have not been visited yet: a run of weights for the
//! pixels immediately to the right on the current row, and one or two rows
//! of weights below, each row centered on the current column.

/// An error diffusion kernel.
///
/// `forward[i]` is the weight for the pixel `i + 1` columns to the right on
/// the current row. `below[d]` is the weight row for the row `d + 1` rows
/// down; its middle entry (index `len / 2`) sits directly under the current
/// pixel. Below rows must keep their full width: trailing zeros hold the
/// center in place and mark neighbors that receive nothing.
///
/// Every weight is a numerator over the shared `divisor`. Neighbors that
/// fall outside the image are skipped and their share of the error is
/// dropped, never redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionKernel {
    /// Weights for the next pixels on the current row, nearest first.
    pub forward: &'static [u8],

    /// Weight rows for the rows below, nearest row first.
    pub below: &'static [&'static [u8]],

    /// Normalizing divisor shared by all weights.
    pub divisor: u8,
}

impl DiffusionKernel {
    /// How many rows beyond the current one the kernel reaches.
    #[inline]
    pub fn depth(&self) -> usize {
        self.below.len()
    }

    /// Fraction of the quantization error the kernel propagates.
    ///
    /// 1.0 for every kernel except Atkinson, which deliberately loses a
    /// quarter of the error.
    pub fn propagation(&self) -> f32 {
        let sum: u32 = self.forward.iter().map(|&w| w as u32).sum::<u32>()
            + self
                .below
                .iter()
                .flat_map(|row| row.iter())
                .map(|&w| w as u32)
                .sum::<u32>();
        sum as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// The most widely known error diffusion algorithm. Distributes error to
/// 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    forward: &[7],
    below: &[&[3, 5, 1]],
    divisor: 16,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation
/// (48/48). Produces smoother gradients than Floyd-Steinberg at the cost
/// of touching three times as many neighbors.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    forward: &[7, 5],
    below: &[&[3, 5, 7, 5, 3], &[1, 3, 5, 3, 1]],
    divisor: 48,
};

/// Fan dithering kernel.
///
/// A Floyd-Steinberg variant that shifts the below-row weights one step
/// left, reaching two columns back. 100% propagation (16/16).
///
/// ```text
///            X   7
///    1   3   5
/// ```
pub const FAN: DiffusionKernel = DiffusionKernel {
    forward: &[7],
    below: &[&[1, 3, 5, 0, 0]],
    divisor: 16,
};

/// Stucki dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation
/// (42/42). Similar reach to Jarvis-Judice-Ninke but with power-of-two
/// weight falloff, which produces slightly sharper results.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    forward: &[8, 4],
    below: &[&[2, 4, 8, 4, 2], &[1, 2, 4, 2, 1]],
    divisor: 42,
};

/// Burkes dithering kernel.
///
/// Stucki without the bottom row. Distributes error to 7 neighbors over
/// 2 rows with 100% propagation (32/32).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: DiffusionKernel = DiffusionKernel {
    forward: &[8, 4],
    below: &[&[2, 4, 8, 4, 2]],
    divisor: 32,
};

/// Sierra (full/Sierra-3) dithering kernel.
///
/// Distributes error to 10 neighbors over 3 rows with 100% propagation
/// (32/32).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: DiffusionKernel = DiffusionKernel {
    forward: &[5, 3],
    below: &[&[2, 4, 5, 4, 2], &[2, 3, 2]],
    divisor: 32,
};

/// Sierra Two-Row dithering kernel.
///
/// A faster approximation of the full Sierra kernel. Distributes error to
/// 7 neighbors over 2 rows with 100% propagation (16/16).
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const TWO_ROW_SIERRA: DiffusionKernel = DiffusionKernel {
    forward: &[4, 3],
    below: &[&[1, 2, 3, 2, 1]],
    divisor: 16,
};

/// Sierra Lite dithering kernel.
///
/// The fastest Sierra variant, touching only 3 neighbors. 100% propagation
/// (4/4).
///
/// ```text
///        X   2
///    1   1
/// ```
pub const SIERRA_LITE: DiffusionKernel = DiffusionKernel {
    forward: &[2],
    below: &[&[1, 1, 0]],
    divisor: 4,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8). The
/// 25% "lost" error tames bleeding in flat regions with small palettes.
/// Originally developed by Bill Atkinson for the Apple Macintosh.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    forward: &[1, 1],
    below: &[&[1, 1, 1], &[1]],
    divisor: 8,
};
