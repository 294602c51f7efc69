//! Threshold map definitions for ordered dithering.
//!
//! A threshold map is a small square matrix of levels tiled across the
//! image. Each pixel gets brightened by the bias of its cell and is then
//! matched against the palette as usual. Because the bias only depends on
//! the pixel's coordinates, ordered dithering is stateless and fully
//! deterministic.

/// A tiled threshold map.
///
/// `levels[i][j]` holds the level for cell `(i, j)`, a numerator over
/// `divisor`. The first index comes from the pixel's column and the second
/// from its row, so a table row in the source lays out a column of the
/// rendered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMap {
    /// Square level matrix, indexed `[x % side][y % side]`.
    pub levels: &'static [&'static [u8]],

    /// Normalizing divisor shared by all levels.
    pub divisor: u8,
}

impl ThresholdMap {
    /// Edge length of the square map.
    #[inline]
    pub fn side(&self) -> usize {
        self.levels.len()
    }

    /// The bias factor for the pixel at `(x, y)`, in `[0, 1]`.
    #[inline]
    pub fn bias(&self, x: usize, y: usize) -> f32 {
        let side = self.side();
        self.levels[x % side][y % side] as f32 / self.divisor as f32
    }
}

/// 4x4 Bayer matrix, levels 1-16 over 17.
///
/// Dispersed-dot pattern: consecutive levels are placed as far apart as
/// possible, so flat regions render as fine checkerboards.
pub const BAYER_4X4: ThresholdMap = ThresholdMap {
    levels: &[
        &[1, 9, 3, 11],
        &[13, 5, 15, 7],
        &[4, 12, 2, 10],
        &[16, 8, 14, 6],
    ],
    divisor: 17,
};

/// 8x8 Bayer matrix, levels 0-63 over 65.
///
/// The recursive expansion of the 2x2 Bayer pattern. 64 distinct levels
/// resolve smooth gradients without visible banding.
pub const BAYER_8X8: ThresholdMap = ThresholdMap {
    levels: &[
        &[0, 48, 12, 60, 3, 51, 15, 63],
        &[32, 16, 44, 28, 35, 19, 47, 31],
        &[8, 56, 4, 52, 11, 59, 7, 55],
        &[40, 24, 36, 20, 43, 27, 39, 23],
        &[2, 50, 14, 62, 1, 49, 13, 61],
        &[34, 18, 46, 30, 33, 17, 45, 29],
        &[10, 58, 6, 54, 9, 57, 5, 53],
        &[42, 26, 38, 22, 41, 25, 37, 21],
    ],
    divisor: 65,
};

/// 4x4 clustered-dot matrix, levels 0-15 over 15.
///
/// Clustered-dot pattern: consecutive levels grow outward from a spot
/// center, mimicking halftone printing. Coarser than Bayer at the same
/// size but more robust on output devices that cannot render isolated
/// pixels.
pub const CLUSTER_4X4: ThresholdMap = ThresholdMap {
    levels: &[
        &[12, 5, 6, 13],
        &[4, 0, 1, 7],
        &[11, 3, 2, 8],
        &[15, 10, 9, 14],
    ],
    divisor: 15,
};

/// 8x8 clustered-dot matrix, levels 0-63 over 64.
///
/// Two interleaved spot centers, one per 4x4 quadrant pair, producing the
/// classic 45-degree halftone screen.
pub const CLUSTER_8X8: ThresholdMap = ThresholdMap {
    levels: &[
        &[24, 10, 12, 26, 35, 47, 49, 37],
        &[8, 0, 2, 14, 45, 59, 61, 51],
        &[22, 6, 4, 16, 43, 57, 63, 53],
        &[30, 20, 18, 28, 33, 41, 55, 39],
        &[34, 46, 48, 36, 25, 11, 13, 27],
        &[44, 58, 60, 50, 9, 1, 3, 15],
        &[42, 56, 62, 52, 23, 7, 5, 17],
        &[32, 40, 54, 38, 31, 21, 19, 29],
    ],
    divisor: 64,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MAPS: [(&str, ThresholdMap); 4] = [
        ("bayer4x4", BAYER_4X4),
        ("bayer8x8", BAYER_8X8),
        ("cluster4x4", CLUSTER_4X4),
        ("cluster8x8", CLUSTER_8X8),
    ];

    #[test]
    fn test_maps_are_square() {
        for (name, map) in ALL_MAPS {
            for row in map.levels {
                assert_eq!(
                    row.len(),
                    map.side(),
                    "{name}: every row must match the side length"
                );
            }
        }
    }

    #[test]
    fn test_levels_are_distinct_and_within_divisor() {
        for (name, map) in ALL_MAPS {
            let mut seen: Vec<u8> = map
                .levels
                .iter()
                .flat_map(|row| row.iter().copied())
                .collect();
            seen.sort_unstable();
            let count = seen.len();
            seen.dedup();
            assert_eq!(seen.len(), count, "{name}: levels must not repeat");
            assert!(
                seen.iter().all(|&l| l <= map.divisor),
                "{name}: levels must not exceed the divisor"
            );
        }
    }

    #[test]
    fn test_bias_column_picks_table_row() {
        // Moving along the image's x axis walks DOWN the table, not across:
        // (1, 0) reads levels[1][0].
        assert!((BAYER_4X4.bias(0, 0) - 1.0 / 17.0).abs() < 1e-6);
        assert!((BAYER_4X4.bias(1, 0) - 13.0 / 17.0).abs() < 1e-6);
        assert!((BAYER_4X4.bias(0, 1) - 9.0 / 17.0).abs() < 1e-6);
    }

    #[test]
    fn test_bias_tiles_with_the_side_length() {
        assert_eq!(BAYER_4X4.bias(4, 4), BAYER_4X4.bias(0, 0));
        assert_eq!(BAYER_4X4.bias(5, 9), BAYER_4X4.bias(1, 1));
        assert_eq!(BAYER_8X8.bias(8, 16), BAYER_8X8.bias(0, 0));
        assert_eq!(CLUSTER_8X8.bias(11, 3), CLUSTER_8X8.bias(3, 3));
    }

    #[test]
    fn test_bias_extremes() {
        // bayer8x8 keeps one cell entirely unbiased.
        assert_eq!(BAYER_8X8.bias(0, 0), 0.0);

        // cluster4x4 runs 0..=15 over divisor 15, so its top cell doubles
        // the pixel value.
        assert_eq!(CLUSTER_4X4.bias(3, 0), 1.0);
        assert_eq!(CLUSTER_4X4.bias(1, 1), 0.0);
    }
}
