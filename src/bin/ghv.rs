use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ghv_rs::{ChartConfig, Collection, Dimension, Explorer, data, viz};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "ghv",
    version,
    about = "Load, explore & render greenhouse crop statistics"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the CSVs, apply view events, and render the resulting state.
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DimensionArg {
    Amount,
    Companies,
    Area,
}

impl From<DimensionArg> for Dimension {
    fn from(d: DimensionArg) -> Self {
        match d {
            DimensionArg::Amount => Dimension::Amount,
            DimensionArg::Companies => Dimension::Companies,
            DimensionArg::Area => Dimension::Area,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Crop statistics CSV (greenhouse export schema).
    #[arg(long)]
    data: PathBuf,
    /// Temperature CSV with yearly averages.
    #[arg(long)]
    aux: PathBuf,
    /// Metric dimension to chart.
    #[arg(long, value_enum, default_value_t = DimensionArg::Amount)]
    dimension: DimensionArg,
    /// Open the detail view for this series.
    #[arg(long)]
    select: Option<String>,
    /// Overlay the temperature series (needs --select).
    #[arg(long, default_value_t = false)]
    compare_aux: bool,
    /// Write the rendered chart to this SVG path.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Dump the render instruction as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Width of the SVG (default 1200).
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the SVG (default 640).
    #[arg(long, default_value_t = 640)]
    height: u32,
    /// Print per-series extents to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_extent(e: Option<(f64, f64)>) -> String {
    match e {
        Some((lo, hi)) => format!("{}..{}", fmt_num(lo), fmt_num(hi)),
        None => "NA".to_string(),
    }
}

fn fmt_num(x: f64) -> String {
    // up to 2 decimals, trailing zeros trimmed
    let s = format!("{x:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = ChartConfig::default();
    let auxiliary = Arc::new(data::load_auxiliary(&args.aux, config.years)?);
    let series = data::load_series(&args.data, auxiliary)?;
    let collection = Collection::new(series);

    if args.stats {
        for s in collection.series() {
            println!(
                "{}  amount={} companies={} area={}",
                s.name(),
                fmt_extent(s.extent(Dimension::Amount)),
                fmt_extent(s.extent(Dimension::Companies)),
                fmt_extent(s.extent(Dimension::Area)),
            );
        }
    }

    let mut explorer = Explorer::new(collection, config);
    let mut instruction = explorer.select_dimension(args.dimension.into())?;
    if let Some(name) = args.select.as_deref() {
        instruction = explorer.select_series(name)?;
    }
    if args.compare_aux {
        instruction = explorer.toggle_auxiliary()?;
    }

    if let Some(path) = args.json.as_ref() {
        std::fs::write(path, serde_json::to_string_pretty(&instruction)?)?;
        eprintln!("Wrote instruction to {}", path.display());
    }
    if let Some(path) = args.out.as_ref() {
        viz::render_svg(&instruction, path, args.width, args.height)?;
        eprintln!("Wrote chart to {}", path.display());
    }

    Ok(())
}
