//! Ditherama - retro palette dithering toolkit.
//!
//! Quantizes images to classic fixed palettes using the dithering methods
//! from the `retro-dither` engine crate. This library exposes modules for
//! integration testing.

pub mod collage;
pub mod error;
pub mod imageio;
pub mod palettes;
pub mod split;
