//! retro-dither: palette quantization and dithering for retro display emulation
//!
//! This library reduces continuous-tone images to fixed palettes the way
//! period hardware did: per-pixel thresholding, classic error diffusion
//! kernels, ordered Bayer and clustered-dot screens, and Gaussian noise
//! dithering.
//!
//! # Quick Start
//!
//! Methods are looked up by name through the [`MethodRegistry`]:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use retro_dither::{MethodRegistry, Palette, Raster, Rgb};
//!
//! let registry = MethodRegistry::standard();
//! let method = registry.get("floyd_steinberg")?;
//!
//! let image = Raster::filled(8, 8, Rgb::gray(0.6));
//! let mut rng = StdRng::seed_from_u64(1);
//! let output = method.apply(&image, &Palette::bilevel(), &mut rng);
//!
//! assert!(output.pixels().iter().all(|&p| p == Rgb::BLACK || p == Rgb::WHITE));
//! # Ok::<(), retro_dither::DitherError>(())
//! ```
//!
//! The method functions in [`dither`] are also callable directly when the
//! kernel or map is known at compile time.
//!
//! # Values and Ranges
//!
//! Pixels are [`Rgb`] triples of `f32` with the nominal channel range
//! `[0.0, 1.0]`. The range is a convention, not an enforced bound: error
//! diffusion deliberately drives working values outside it and resolves
//! them through the palette match. Conversion to and from 8-bit bytes
//! happens only at the edges, via [`Rgb::from_u8`] and [`Rgb::to_bytes`].
//!
//! # Determinism
//!
//! Threshold, error diffusion, and ordered dithering are pure functions of
//! their inputs. The random methods take any [`rand::Rng`], so a seeded
//! generator makes the whole method set reproducible:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use retro_dither::{dither, Palette, Raster, Rgb};
//!
//! let image = Raster::filled(4, 4, Rgb::gray(0.5));
//! let palette = Palette::bilevel();
//!
//! let a = dither::randomized(&image, &palette, &mut StdRng::seed_from_u64(7));
//! let b = dither::randomized(&image, &palette, &mut StdRng::seed_from_u64(7));
//! assert_eq!(a, b);
//! ```

pub mod color;
pub mod dither;
pub mod error;
pub mod palette;
pub mod raster;
pub mod registry;


pub use color::Rgb;
pub use dither::{DitherMethod, RandomMode};
pub use error::DitherError;
pub use palette::Palette;
pub use raster::Raster;
pub use registry::MethodRegistry;
