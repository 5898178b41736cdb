use clap::{Parser, Subcommand};
use graymap::{load_pgm_counted, locate, save_pgm, GrayImage, PixelCounters};
use serde::Serialize;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grayscale raster operations over raw PGM files")]
struct Cli {
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
    /// Print pixel-access counters after the operation.
    #[arg(long)]
    counters: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print image dimensions and gray-level stats as JSON.
    Info { input: PathBuf },
    /// Photographic negative.
    Negate { input: PathBuf, output: PathBuf },
    /// Threshold to black/white at a gray level.
    Threshold {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        level: u8,
    },
    /// Multiply gray levels by a factor, saturating at maxval.
    Brighten {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        factor: f64,
    },
    /// Rotate by 90 degrees.
    Rotate { input: PathBuf, output: PathBuf },
    /// Flip left-right.
    Mirror { input: PathBuf, output: PathBuf },
    /// Crop a rectangle.
    Crop {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        x: usize,
        #[arg(long)]
        y: usize,
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
    },
    /// Mean blur with a (2*dx+1) x (2*dy+1) window.
    Blur {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 1)]
        dx: usize,
        #[arg(long, default_value_t = 1)]
        dy: usize,
    },
    /// Paste an overlay into a base image.
    Paste {
        base: PathBuf,
        overlay: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        x: usize,
        #[arg(long, default_value_t = 0)]
        y: usize,
    },
    /// Blend an overlay into a base image.
    Blend {
        base: PathBuf,
        overlay: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        x: usize,
        #[arg(long, default_value_t = 0)]
        y: usize,
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
    },
    /// Search for a pattern; prints the first match as JSON.
    Locate { haystack: PathBuf, needle: PathBuf },
}

#[derive(Debug, Serialize)]
struct InfoRecord {
    width: usize,
    height: usize,
    maxval: u8,
    min: Option<u8>,
    max: Option<u8>,
}

#[derive(Debug, Serialize)]
struct LocateRecord {
    found: bool,
    x: Option<usize>,
    y: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("graymap=info".parse()?))
            .with_target(false)
            .init();
    }

    let counters = PixelCounters::shared();
    let load = |path: &PathBuf| -> graymap::GrayMapResult<GrayImage> {
        load_pgm_counted(path, Rc::clone(&counters))
    };

    match &cli.command {
        Command::Info { input } => {
            let img = load(input)?;
            let stats = img.stats();
            let record = InfoRecord {
                width: img.width(),
                height: img.height(),
                maxval: img.maxval(),
                min: stats.map(|s| s.min),
                max: stats.map(|s| s.max),
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Negate { input, output } => {
            let mut img = load(input)?;
            img.negate();
            save_pgm(&img, output)?;
        }
        Command::Threshold {
            input,
            output,
            level,
        } => {
            let mut img = load(input)?;
            img.threshold(*level);
            save_pgm(&img, output)?;
        }
        Command::Brighten {
            input,
            output,
            factor,
        } => {
            if *factor < 0.0 {
                return Err("brighten factor must be non-negative".into());
            }
            let mut img = load(input)?;
            img.brighten(*factor);
            save_pgm(&img, output)?;
        }
        Command::Rotate { input, output } => {
            let img = load(input)?;
            save_pgm(&img.rotate90()?, output)?;
        }
        Command::Mirror { input, output } => {
            let img = load(input)?;
            save_pgm(&img.mirror()?, output)?;
        }
        Command::Crop {
            input,
            output,
            x,
            y,
            width,
            height,
        } => {
            let img = load(input)?;
            save_pgm(&img.crop(*x, *y, *width, *height)?, output)?;
        }
        Command::Blur {
            input,
            output,
            dx,
            dy,
        } => {
            let mut img = load(input)?;
            img.blur(*dx, *dy)?;
            save_pgm(&img, output)?;
        }
        Command::Paste {
            base,
            overlay,
            output,
            x,
            y,
        } => {
            let mut img = load(base)?;
            let overlay = load(overlay)?;
            if !img.is_valid_rect(*x, *y, overlay.width(), overlay.height()) {
                return Err(format!(
                    "overlay does not fit at ({x}, {y}) in a {}x{} image",
                    img.width(),
                    img.height()
                )
                .into());
            }
            if overlay.maxval() > img.maxval() {
                return Err(format!(
                    "overlay maxval {} exceeds base maxval {}",
                    overlay.maxval(),
                    img.maxval()
                )
                .into());
            }
            img.paste(*x, *y, &overlay);
            save_pgm(&img, output)?;
        }
        Command::Blend {
            base,
            overlay,
            output,
            x,
            y,
            alpha,
        } => {
            let mut img = load(base)?;
            let overlay = load(overlay)?;
            if !img.is_valid_rect(*x, *y, overlay.width(), overlay.height()) {
                return Err(format!(
                    "overlay does not fit at ({x}, {y}) in a {}x{} image",
                    img.width(),
                    img.height()
                )
                .into());
            }
            img.blend(*x, *y, &overlay, *alpha);
            save_pgm(&img, output)?;
        }
        Command::Locate { haystack, needle } => {
            let img = load(haystack)?;
            let pattern = load(needle)?;
            let hit = locate(&img, &pattern);
            let record = LocateRecord {
                found: hit.is_some(),
                x: hit.map(|p| p.0),
                y: hit.map(|p| p.1),
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    if cli.counters {
        eprintln!(
            "pixel accesses: {} reads, {} writes",
            counters.reads(),
            counters.writes()
        );
    }
    Ok(())
}
