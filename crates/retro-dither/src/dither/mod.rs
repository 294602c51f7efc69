//! Dithering methods.
//!
//! Four families, all reducing a [`Raster`] to palette colors:
//!
//! - **Threshold**: plain nearest-color per pixel, the no-dithering baseline
//! - **Error diffusion**: sequential scan handing quantization error to
//!   unvisited neighbors ([`kernel`] holds the nine classic kernels)
//! - **Ordered**: a tiled threshold map biases each pixel by position
//!   ([`map`] holds Bayer and clustered-dot matrices)
//! - **Randomized**: Gaussian noise per pixel or per averaged block
//!
//! [`DitherMethod`] wraps all of them behind one `apply` call so callers
//! can hold a uniform value, look methods up by name through the
//! [`MethodRegistry`](crate::registry::MethodRegistry), and stay oblivious
//! to which family does the work.

pub mod error_diffusion;
pub mod kernel;
pub mod map;
pub mod ordered;
pub mod randomized;
pub mod threshold;

pub use error_diffusion::diffuse;
pub use kernel::DiffusionKernel;
pub use map::ThresholdMap;
pub use ordered::ordered;
pub use randomized::{block_randomized, randomized, BLOCKS_PER_AXIS, NOISE_STDDEV};
pub use threshold::threshold;

use rand::Rng;

use crate::palette::Palette;
use crate::raster::Raster;

/// Which of the two noise-based methods to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomMode {
    /// Independent noise for every pixel.
    PerPixel,
    /// One noise draw per block of averaged pixels.
    BlockAverage,
}

/// A dithering method, ready to apply.
///
/// Carrying the kernel or map inside the variant keeps a method a plain
/// `Copy` value: registries, CLIs, and tests pass methods around without
/// trait objects or lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherMethod {
    /// Nearest palette color per pixel.
    Threshold,
    /// Raster scan propagating quantization error through a kernel.
    ErrorDiffusion(DiffusionKernel),
    /// Position-dependent bias from a tiled threshold map.
    Ordered(ThresholdMap),
    /// Gaussian noise before the palette match.
    Randomized(RandomMode),
}

impl DitherMethod {
    /// Run the method over `image` against `palette`.
    ///
    /// Only the `Randomized` variants draw from `rng`; the other methods
    /// are deterministic and leave it untouched. The input raster is never
    /// modified.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        image: &Raster,
        palette: &Palette,
        rng: &mut R,
    ) -> Raster {
        match self {
            DitherMethod::Threshold => threshold(image, palette),
            DitherMethod::ErrorDiffusion(kernel) => diffuse(image, palette, kernel),
            DitherMethod::Ordered(map) => ordered(image, palette, map),
            DitherMethod::Randomized(RandomMode::PerPixel) => randomized(image, palette, rng),
            DitherMethod::Randomized(RandomMode::BlockAverage) => {
                block_randomized(image, palette, rng)
            }
        }
    }
}
