// leeway-plot - Filled contour plot of leeway angle over speed and heel
//
// Pipeline:
//   1. Build the speed x heel grid
//   2. Evaluate leeway = k * heel / speed^2 at every node
//   3. Pick contour levels and rasterize bands
//   4. Draw axes, labels and colour bar
//   5. Write PNG
//
// Usage: cargo run --bin leeway-plot -- [--out leeway.png]
// Log level follows RUST_LOG (default: info).

mod figure;
mod font;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leeway_engine::config::{LeewayConfig, MAX_BANDS};
use leeway_engine::render::ContourLevels;

#[derive(Parser, Debug)]
#[command(name = "leeway-plot", about = "Render leeway angle as a function of speed and heel")]
struct Args {
    /// Where to write the PNG
    #[arg(long, default_value = "leeway.png")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = LeewayConfig::default();

    info!(
        speed = ?(config.speed.low, config.speed.high),
        heel = ?(config.heel.low, config.heel.high),
        k = config.k,
        "Computing leeway field..."
    );
    let field = leeway_engine::compute(&config).context("failed to compute leeway field")?;

    let (min, max) = field.range();
    let levels = ContourLevels::auto(min, max, MAX_BANDS);
    info!(min, max, bands = levels.bands(), "Rendering contours...");

    let img = figure::draw(&field, &levels);
    img.save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(path = %args.out.display(), "Done!");
    Ok(())
}
