//! Method x palette collage driver.
//!
//! Renders every registry method against every builtin palette over one
//! decoded source raster and composes the results into a single grid.
//! Cells render in parallel; each work item derives its own seed from the
//! base seed, so a fixed base seed reproduces the whole collage.

use image::RgbImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use retro_dither::{MethodRegistry, Palette, Raster};

use crate::error::AppError;
use crate::imageio::raster_to_image;
use crate::palettes::PaletteSet;

/// Upper bound on the composed canvas, in pixels.
const MAX_CANVAS_PIXELS: u64 = 1 << 31;

/// Render every method x palette combination into one canvas.
///
/// The grid is `(n_palettes + 1)` cells wide and `(n_methods + 1)` cells
/// tall, each cell the source size. Cell (0, 0) holds the original; the
/// rest of row 0 holds one swatch strip per palette; the rest of column 0
/// stays black. Cell (1 + p, 1 + m) holds method m rendered with palette p.
/// The row/column legend goes to the log, column left to right and row top
/// to bottom.
pub fn render_collage(
    source: &Raster,
    registry: &MethodRegistry,
    palettes: &PaletteSet,
    base_seed: u64,
) -> Result<RgbImage, AppError> {
    let width = source.cols();
    let height = source.rows();
    let n_palettes = palettes.len();
    let n_methods = registry.len();

    let (canvas_cols, canvas_rows) = canvas_dims(width, height, n_palettes, n_methods)?;

    tracing::info!(
        methods = n_methods,
        palettes = n_palettes,
        cols = canvas_cols,
        rows = canvas_rows,
        seed = base_seed,
        "Rendering collage"
    );

    let mut canvas = RgbImage::new(canvas_cols as u32, canvas_rows as u32);

    // Original in the top-left corner, swatch strips across the header row.
    image::imageops::replace(&mut canvas, &raster_to_image(source), 0, 0);
    for (p_i, (name, palette)) in palettes.iter().enumerate() {
        let strip = swatch_strip(palette, width, height);
        image::imageops::replace(&mut canvas, &strip, ((p_i + 1) * width) as i64, 0);
        tracing::info!(column = p_i + 1, palette = name, "Collage column");
    }
    for (m_i, (name, _)) in registry.iter().enumerate() {
        tracing::info!(row = m_i + 1, method = name, "Collage row");
    }

    // One work item per cell. Seeds derive from grid position, so the
    // result does not depend on rayon's scheduling.
    let jobs: Vec<_> = registry
        .iter()
        .enumerate()
        .flat_map(|(m_i, (_, method))| {
            palettes
                .iter()
                .enumerate()
                .map(move |(p_i, (_, palette))| (m_i, p_i, method, palette))
        })
        .collect();

    let cells: Vec<_> = jobs
        .into_par_iter()
        .map(|(m_i, p_i, method, palette)| {
            let cell_index = (m_i * n_palettes + p_i) as u64;
            let mut rng = StdRng::seed_from_u64(derive_seed(base_seed, cell_index));
            let cell = method.apply(source, palette, &mut rng);
            (m_i, p_i, raster_to_image(&cell))
        })
        .collect();

    for (m_i, p_i, cell) in cells {
        let x = ((p_i + 1) * width) as i64;
        let y = ((m_i + 1) * height) as i64;
        image::imageops::replace(&mut canvas, &cell, x, y);
    }

    Ok(canvas)
}

/// Validate and compute the composed canvas size.
fn canvas_dims(
    width: usize,
    height: usize,
    n_palettes: usize,
    n_methods: usize,
) -> Result<(usize, usize), AppError> {
    let cols = width * (n_palettes + 1);
    let rows = height * (n_methods + 1);
    if cols as u64 * rows as u64 > MAX_CANVAS_PIXELS {
        return Err(AppError::CollageTooLarge {
            cols,
            rows,
            max: MAX_CANVAS_PIXELS as usize,
        });
    }
    Ok((cols, rows))
}

/// Spread cell indices across the seed space with an odd multiplier so no
/// two cells share an rng stream.
fn derive_seed(base: u64, index: u64) -> u64 {
    base.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// A palette swatch: equal vertical bands, one per entry, in palette order.
fn swatch_strip(palette: &Palette, width: usize, height: usize) -> RgbImage {
    let n = palette.len();
    let raster = Raster::from_fn(width, height, |x, _| palette.color(x * n / width));
    raster_to_image(&raster)
}
