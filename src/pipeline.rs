//! Render pipeline — one input graph file in, one PNG out.
//!
//! Every step is fatal on failure: the run either writes one complete image
//! and returns its path, or returns the first error having written nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classify::{classify_edges, classify_nodes};
use crate::error::VizError;
use crate::formats::{self, GraphFormat};
use crate::layout::{self, LayoutAlgorithm};
use crate::render::{Canvas, Style, draw_topology};

/// Options controlling layout and output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub layout: LayoutAlgorithm,
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// RNG seed for the force and random layouts. Fixed default keeps
    /// reruns byte-identical.
    pub seed: u64,
    /// Output path override; None derives `<input stem>.png`.
    pub output: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: LayoutAlgorithm::default(),
            width: 800,
            height: 600,
            seed: 1,
            output: None,
        }
    }
}

/// Read a graph file, classify it, lay it out, and write the rendered PNG.
/// Returns the path of the written image.
pub fn render_file(input: &Path, opts: &RenderOptions) -> Result<PathBuf, VizError> {
    let format = GraphFormat::detect(input)?;
    debug!(input = %input.display(), %format, "detected input format");

    let xml = fs::read_to_string(input).map_err(|source| VizError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let topo = format.load(&xml).map_err(|message| VizError::Load {
        format,
        path: input.to_path_buf(),
        message,
    })?;
    debug!(
        nodes = topo.node_count(),
        edges = topo.edge_count(),
        "loaded topology"
    );

    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| formats::output_path(input));

    let node_classes = classify_nodes(&topo);
    let edge_classes = classify_edges(&topo);
    debug!(
        switches = node_classes.switches.len(),
        switch_links = edge_classes.switch_links.len(),
        "classified topology"
    );

    let positions = layout::compute(&topo, opts.layout, opts.seed);

    let mut canvas = Canvas::new(opts.width, opts.height).map_err(VizError::Render)?;
    draw_topology(
        &mut canvas,
        &topo,
        &positions,
        &node_classes,
        &edge_classes,
        &Style::default(),
    );
    canvas.save_png(&output).map_err(VizError::Render)?;

    info!(output = %output.display(), "wrote rendered image");
    Ok(output)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
