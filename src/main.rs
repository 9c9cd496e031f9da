//! nettopo-viz CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nettopo_viz::layout::LayoutAlgorithm;
use nettopo_viz::{RenderOptions, VizError, render_file};

/// Render a network topology graph (GraphML/GEXF) to a PNG image.
#[derive(Parser, Debug)]
#[command(
    name = "nettopo-viz",
    version = env!("NETTOPO_VIZ_VERSION"),
    about = "Render a network topology graph (GraphML/GEXF) to a PNG image"
)]
struct Cli {
    /// Input graph file (.graphml or .gexf)
    input: Option<PathBuf>,

    /// Layout algorithm
    #[arg(short = 'l', long = "layout", value_enum, default_value = "radial")]
    layout: LayoutAlgorithm,

    /// Write the image to this path instead of <input stem>.png
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long = "width", default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long = "height", default_value_t = 600)]
    height: u32,

    /// Seed for the force and random layouts
    #[arg(long = "seed", default_value_t = 1)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        eprintln!("error: {}", VizError::MissingInput);
        process::exit(1);
    };

    let opts = RenderOptions {
        layout: cli.layout,
        width: cli.width,
        height: cli.height,
        seed: cli.seed,
        output: cli.output,
    };

    match render_file(&input, &opts) {
        Ok(path) => {
            println!("{}", path.display());
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
