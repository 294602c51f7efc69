use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherama::collage::render_collage;
use ditherama::imageio::{load_raster, save_raster};
use ditherama::palettes::{parse_color_list, PaletteSet, DEFAULT_PALETTE};
use ditherama::split::split_bands;
use retro_dither::{MethodRegistry, Palette};

#[derive(Parser)]
#[command(name = "ditherama")]
#[command(about = "Quantize images to retro palettes with classic dithering methods")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image with one method and one palette
    Dither {
        /// Path to an image file to dither
        image: PathBuf,

        /// Dithering method name (see 'ditherama list')
        #[arg(short, long, default_value = "bayer4x4")]
        method: String,

        /// Palette name (see 'ditherama list')
        #[arg(short, long, default_value = DEFAULT_PALETTE)]
        palette: String,

        /// Custom palette as comma-separated hex colors (e.g. "#000,#55ffff,#ff5555"),
        /// overriding --palette
        #[arg(long)]
        colors: Option<String>,

        /// Output file path (default: <stem>-<method>-<palette>.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the randomized methods (entropy-seeded otherwise)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render every method x palette combination into one collage image
    Collage {
        /// Path to an image file to dither
        image: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "collage.png")]
        output: PathBuf,

        /// Base seed for the randomized cells (entropy-seeded otherwise)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Dither each color channel separately and recombine them
    Split {
        /// Path to an image file to dither
        image: PathBuf,

        /// Palette name (see 'ditherama list')
        #[arg(short, long, default_value = DEFAULT_PALETTE)]
        palette: String,

        /// Custom palette as comma-separated hex colors, overriding --palette
        #[arg(long)]
        colors: Option<String>,

        /// Output file path (default: <stem>-split-<palette>.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available method and palette names
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Some(Commands::Dither {
            image,
            method,
            palette,
            colors,
            output,
            seed,
        }) => run_dither_command(&image, &method, &palette, colors.as_deref(), output, seed),
        Some(Commands::Collage {
            image,
            output,
            seed,
        }) => run_collage_command(&image, &output, seed),
        Some(Commands::Split {
            image,
            palette,
            colors,
            output,
        }) => run_split_command(&image, &palette, colors.as_deref(), output),
        Some(Commands::List) => {
            run_list_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI use
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherama=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Dither one image with one method and one palette, then save it
fn run_dither_command(
    image: &Path,
    method_name: &str,
    palette_name: &str,
    colors: Option<&str>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let registry = MethodRegistry::standard();
    let palettes = PaletteSet::builtin();

    // Resolve both names before touching any file, so bad names fail
    // without leaving output behind.
    let method = registry.get(method_name)?;
    let (palette, palette_label) = resolve_palette(&palettes, palette_name, colors)?;

    let source = load_raster(image)?;
    tracing::info!(
        path = %image.display(),
        cols = source.cols(),
        rows = source.rows(),
        method = method_name,
        palette = %palette_label,
        "Dithering image"
    );

    let mut rng = make_rng(seed);
    let result = method.apply(&source, &palette, &mut rng);

    let output =
        output.unwrap_or_else(|| default_output(image, &format!("{method_name}-{palette_label}")));
    save_raster(&result, &output)?;
    println!(
        "Dithered {} ({}x{})",
        output.display(),
        result.cols(),
        result.rows()
    );

    Ok(())
}

/// Render every method x palette combination into one collage image
fn run_collage_command(image: &Path, output: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let registry = MethodRegistry::standard();
    let palettes = PaletteSet::builtin();

    let source = load_raster(image)?;
    let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    let canvas = render_collage(&source, &registry, &palettes, base_seed)?;
    canvas
        .save(output)
        .map_err(|e| anyhow::anyhow!("Encode error: {e}"))?;
    println!(
        "Rendered {} ({}x{}, {} cells)",
        output.display(),
        canvas.width(),
        canvas.height(),
        registry.len() * palettes.len()
    );

    Ok(())
}

/// Dither each color channel separately and recombine them
fn run_split_command(
    image: &Path,
    palette_name: &str,
    colors: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let palettes = PaletteSet::builtin();
    let (palette, palette_label) = resolve_palette(&palettes, palette_name, colors)?;

    let source = load_raster(image)?;
    tracing::info!(
        path = %image.display(),
        palette = %palette_label,
        "Splitting channels"
    );

    let result = split_bands(&source, &palette);
    let output =
        output.unwrap_or_else(|| default_output(image, &format!("split-{palette_label}")));
    save_raster(&result, &output)?;
    println!(
        "Dithered {} ({}x{})",
        output.display(),
        result.cols(),
        result.rows()
    );

    Ok(())
}

/// Print method names (registry order) and palette names (table order)
fn run_list_command() {
    let registry = MethodRegistry::standard();
    let palettes = PaletteSet::builtin();

    println!("Methods:");
    for name in registry.names() {
        println!("  {name}");
    }
    println!("\nPalettes:");
    for name in palettes.names() {
        println!("  {name}");
    }
}

/// Display version, available names, and command summary
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Ditherama v{VERSION} - retro palette dithering toolkit\n");
    run_list_command();

    println!("\nCommands:");
    println!("  ditherama dither    Dither an image with one method and one palette");
    println!("  ditherama collage   Render every method x palette into one image");
    println!("  ditherama split     Dither each color channel separately");
    println!("  ditherama list      List available method and palette names");
    println!("\nRun 'ditherama --help' for more details.");
}

/// Resolve the palette from --colors (labeled "custom") or the named table
fn resolve_palette(
    palettes: &PaletteSet,
    name: &str,
    colors: Option<&str>,
) -> anyhow::Result<(Palette, String)> {
    match colors {
        Some(list) => Ok((parse_color_list(list)?, "custom".to_string())),
        None => Ok((palettes.get(name)?.clone(), name.to_string())),
    }
}

/// Default output path: `<stem>-<label>.png` next to the input
fn default_output(input: &Path, label: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}-{label}.png"))
}

/// Seeded rng for reproducible runs, entropy-seeded otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
