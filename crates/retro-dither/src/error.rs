//! Typed errors for palette construction, color parsing, and name lookup.

use thiserror::Error;

/// Errors produced by the quantization engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitherError {
    /// A method name was not found in the registry.
    #[error("unknown dither method `{0}`")]
    UnknownMethod(String),

    /// A palette name was not found among the built-in palettes.
    #[error("unknown palette `{0}`")]
    UnknownPalette(String),

    /// A palette was constructed with no colors.
    #[error("palette contains no colors")]
    InvalidPalette,

    /// A buffer did not match the dimensions it was declared with.
    #[error("{context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid hex color `{0}` (expected #RGB or #RRGGBB)")]
    InvalidColor(String),
}
