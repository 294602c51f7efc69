//! Name-based method lookup.

use crate::dither::{kernel, map, DitherMethod, RandomMode};
use crate::error::DitherError;

/// The dithering methods reachable by name.
///
/// Entry order is stable and is the order `names()` reports, so listings
/// group the methods by family: threshold first, then the error diffusion
/// kernels, the ordered maps, and the random methods.
///
/// # Example
///
/// ```
/// use retro_dither::MethodRegistry;
///
/// let registry = MethodRegistry::standard();
/// assert!(registry.get("floyd_steinberg").is_ok());
/// assert!(registry.get("floyd").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MethodRegistry {
    entries: Vec<(&'static str, DitherMethod)>,
}

impl MethodRegistry {
    /// The full standard method set.
    pub fn standard() -> Self {
        use DitherMethod::{ErrorDiffusion, Ordered, Randomized, Threshold};

        Self {
            entries: vec![
                ("threshold", Threshold),
                ("floyd_steinberg", ErrorDiffusion(kernel::FLOYD_STEINBERG)),
                ("jarvis_judice_ninke", ErrorDiffusion(kernel::JARVIS_JUDICE_NINKE)),
                ("fan", ErrorDiffusion(kernel::FAN)),
                ("stucki", ErrorDiffusion(kernel::STUCKI)),
                ("burkes", ErrorDiffusion(kernel::BURKES)),
                ("sierra", ErrorDiffusion(kernel::SIERRA)),
                ("two_row_sierra", ErrorDiffusion(kernel::TWO_ROW_SIERRA)),
                ("sierra_lite", ErrorDiffusion(kernel::SIERRA_LITE)),
                ("atkinson", ErrorDiffusion(kernel::ATKINSON)),
                ("bayer4x4", Ordered(map::BAYER_4X4)),
                ("bayer8x8", Ordered(map::BAYER_8X8)),
                ("cluster4x4", Ordered(map::CLUSTER_4X4)),
                ("cluster8x8", Ordered(map::CLUSTER_8X8)),
                ("random", Randomized(RandomMode::PerPixel)),
                ("block_random", Randomized(RandomMode::BlockAverage)),
            ],
        }
    }

    /// Look a method up by name.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::UnknownMethod`] carrying the requested name.
    pub fn get(&self, name: &str) -> Result<DitherMethod, DitherError> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|&(_, method)| method)
            .ok_or_else(|| DitherError::UnknownMethod(name.to_string()))
    }

    /// Method names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }

    /// Name and method pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DitherMethod)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of registered methods.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no methods are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::Palette;
    use crate::raster::Raster;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_names_and_order() {
        let registry = MethodRegistry::standard();
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(
            names,
            [
                "threshold",
                "floyd_steinberg",
                "jarvis_judice_ninke",
                "fan",
                "stucki",
                "burkes",
                "sierra",
                "two_row_sierra",
                "sierra_lite",
                "atkinson",
                "bayer4x4",
                "bayer8x8",
                "cluster4x4",
                "cluster8x8",
                "random",
                "block_random",
            ]
        );
    }

    #[test]
    fn test_lookup_returns_the_named_method() {
        let registry = MethodRegistry::standard();

        assert_eq!(
            registry.get("atkinson").unwrap(),
            DitherMethod::ErrorDiffusion(kernel::ATKINSON)
        );
        assert_eq!(
            registry.get("cluster8x8").unwrap(),
            DitherMethod::Ordered(map::CLUSTER_8X8)
        );
        assert_eq!(
            registry.get("block_random").unwrap(),
            DitherMethod::Randomized(RandomMode::BlockAverage)
        );
    }

    #[test]
    fn test_unknown_name_carries_the_request() {
        let registry = MethodRegistry::standard();

        assert_eq!(
            registry.get("floyd").unwrap_err(),
            DitherError::UnknownMethod("floyd".to_string())
        );
        // Lookup is exact, not fuzzy.
        assert!(registry.get("Atkinson").is_err());
        assert!(registry.get("bayer 4x4").is_err());
    }

    #[test]
    fn test_every_entry_applies_cleanly() {
        let registry = MethodRegistry::standard();
        let image = Raster::from_fn(4, 4, |x, y| Rgb::gray((x + y) as f32 / 6.0));
        let palette = Palette::bilevel();
        let mut rng = StdRng::seed_from_u64(1);

        for (name, method) in registry.iter() {
            let out = method.apply(&image, &palette, &mut rng);
            assert_eq!(out.cols(), 4, "{name} changed the width");
            assert_eq!(out.rows(), 4, "{name} changed the height");
            for &pixel in out.pixels() {
                assert!(
                    pixel == Rgb::BLACK || pixel == Rgb::WHITE,
                    "{name} produced non-palette pixel {pixel:?}"
                );
            }
        }
    }
}
