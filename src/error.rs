use thiserror::Error;

use retro_dither::DitherError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Collage too large: {cols}x{rows} pixels (max {max})")]
    CollageTooLarge {
        cols: usize,
        rows: usize,
        max: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
