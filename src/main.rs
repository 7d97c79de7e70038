use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use barcode_sheet::config::PageSize;
use barcode_sheet::consts::{FONT_BYTES, OUTPUT_PATH};
use barcode_sheet::{Catalogue, FontCache, SheetBuilder, SheetConfig};

#[derive(Parser)]
#[command(name = "barcode-sheet")]
#[command(author, version, about = "Render the vim command barcode sheet as a PNG")]
struct Cli {
    /// Output PNG path
    #[arg(short, long, default_value = OUTPUT_PATH)]
    output: PathBuf,

    /// TrueType font to use instead of the embedded DejaVu Sans
    #[arg(long)]
    font: Option<PathBuf>,

    /// Render resolution (A4 page)
    #[arg(long, default_value_t = PageSize::A4.dpi)]
    dpi: u32,

    /// Page margin in pixels
    #[arg(long)]
    margin: Option<f64>,

    /// Grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Narrowest allowed barcode module in pixels
    #[arg(long)]
    min_module_px: Option<u32>,

    /// Leave the page title off
    #[arg(long)]
    no_title: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut config = SheetConfig::default();
    config.page.dpi = cli.dpi;
    if let Some(margin) = cli.margin {
        config.margin_px = margin;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(min) = cli.min_module_px {
        config.barcode.min_module_px = min;
    }
    if cli.no_title {
        config.title = None;
    }

    let mut fonts = match &cli.font {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
            FontCache::from_vec(bytes).with_context(|| format!("loading font {}", path.display()))?
        }
        None => FontCache::from_static(FONT_BYTES).context("loading embedded font")?,
    };

    let catalogue = Catalogue::vim();
    let sheet = SheetBuilder::new(config, &mut fonts)
        .render(&catalogue)
        .context("rendering sheet")?;

    for (index, reason) in sheet.skipped() {
        eprintln!("skipped #{index}: {reason}");
    }

    sheet.save(&cli.output).context("saving sheet")?;
    println!("Saved: {}", cli.output.display());
    Ok(())
}
